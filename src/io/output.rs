//! # Output lines
//!
//! Every input value produces one line of text, in one of two formats.
use std::fmt::Display;
use std::ops::Div;

use num::One;

use crate::data::number_types::traits::factorization::{Divisor, Factorization};

/// What to print for each value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    /// `n=q*d` with `d` the smallest divisor, or `n=n*1` for a prime.
    Divisor,
    /// `n=p^k*...`, the complete prime factorization.
    Factorization,
}

impl Default for Format {
    fn default() -> Self {
        Format::Divisor
    }
}

/// Format `n` as a quotient times its smallest divisor.
///
/// # Arguments
///
/// * `n`: The value that was searched.
/// * `divisor`: The search result for `n`.
///
/// # Return value
///
/// `"n=q*d"`; for example `"15=5*3"`, `"2=1*2"` or `"7=7*1"`.
pub fn divisor_line<T>(n: &T, divisor: Divisor<T>) -> String
where
    T: Display + Clone + One,
    for<'r> &'r T: Div<&'r T, Output=T>,
{
    let (quotient, divisor) = divisor.cofactors(n);
    format!("{}={}*{}", n, quotient, divisor)
}

/// Format `n` as the product of its prime powers, like `"360=2^3*3^2*5"`.
pub fn factorization_line<T, P>(n: &T, factorization: &Factorization<T, P>) -> String
where
    T: Display,
    P: Display + One + PartialEq,
{
    format!("{}={}", n, factorization)
}
