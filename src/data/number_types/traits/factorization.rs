//! # Factorization traits
//!
//! What the integer types in this crate can compute about themselves.
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Div;

use itertools::Itertools;
use num::One;

/// Integers that have a smallest divisor greater than one.
pub trait SmallestDivisor: Sized {
    /// Find the smallest divisor of this value that is at least 2 and at most its square root.
    ///
    /// # Return value
    ///
    /// `Divisor::Found` with that divisor, or `Divisor::Prime` if there is none. Note that the even
    /// check comes first, so `2` itself is reported as `Found(2)`.
    ///
    /// # Errors
    ///
    /// If the value is smaller than 2, for which no divisor is defined.
    fn smallest_divisor(&self) -> Result<Divisor<Self>, InvalidInput<Self>>;
}

/// Outcome of a smallest divisor search.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Divisor<T> {
    /// A divisor `d` with `2 <= d` that divides the value evenly.
    ///
    /// No smaller divisor of at least 2 exists.
    Found(T),
    /// No divisor below the square root exists, the value is prime.
    Prime,
}

impl<T> Divisor<T> {
    /// Whether the search ended without a divisor.
    pub fn is_prime(&self) -> bool {
        matches!(self, Divisor::Prime)
    }

    /// Split `n` into a quotient and divisor pair.
    ///
    /// # Arguments
    ///
    /// * `n`: The value that this divisor was computed for.
    ///
    /// # Return value
    ///
    /// `(n / d, d)` for a found divisor `d`, and `(n, 1)` when `n` is prime.
    pub fn cofactors(self, n: &T) -> (T, T)
    where
        T: Clone + One,
        for<'r> &'r T: Div<&'r T, Output=T>,
    {
        match self {
            Divisor::Found(divisor) => (n / &divisor, divisor),
            Divisor::Prime => (n.clone(), T::one()),
        }
    }
}

/// A value outside of the domain of the divisor search.
///
/// Only integers `n >= 2` have a smallest divisor. Values like 0 and 1 would otherwise make the
/// search divide by zero or never terminate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidInput<T> {
    /// The rejected value.
    pub value: T,
}

impl<T: Display> Display for InvalidInput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Divisors are only defined for integers of at least 2, got {}", self.value)
    }
}

impl<T: Debug + Display> Error for InvalidInput<T> {}

/// Values that can be written as a product of prime powers.
pub trait Factorizable: Sized {
    /// Some prime greater than 1.
    type Factor: Ord;
    /// How often the factor appears in the number.
    type Power;

    /// Compute the prime factorization.
    ///
    /// # Errors
    ///
    /// If the value is smaller than 2.
    fn factorize(&self) -> Result<Factorization<Self::Factor, Self::Power>, InvalidInput<Self>>;
}

/// Prime factorization representation of an integer of at least 2.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Factorization<Factor, Power> {
    /// `(prime factor, power)` tuples.
    ///
    /// Sorted by factor, each factor appears once. The powers can't be zero, as this is a sparse
    /// representation.
    pub factors: Vec<(Factor, Power)>,
}

impl<Factor: Ord, Power> Factorization<Factor, Power> {
    /// Collect a sorted sequence of prime factors, possibly repeated, into prime powers.
    pub fn from_sorted_primes<I>(primes: I) -> Self
    where
        I: IntoIterator<Item=Factor>,
        Power: From<u32>,
    {
        let factors = primes.into_iter()
            .dedup_with_count()
            .map(|(count, prime)| (prime, Power::from(count as u32)))
            .collect::<Vec<_>>();
        debug_assert!(factors.windows(2).all(|w| w[0].0 < w[1].0));

        Self { factors }
    }
}

impl<Factor: Display, Power: Display + One + PartialEq> Display for Factorization<Factor, Power> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = self.factors.iter()
            .map(|(factor, power)| if power.is_one() {
                factor.to_string()
            } else {
                format!("{}^{}", factor, power)
            })
            .join("*");

        f.write_str(&text)
    }
}
