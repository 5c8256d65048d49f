//! # Trial division
//!
//! Candidates are tested in increasing order: first 2, then every odd number from 3 up to the
//! square root of the value. There is no sieve and nothing is remembered between calls; the cost
//! is proportional to the smallest prime factor, and to the square root of the value when it is
//! prime.
use num::{BigInt, BigUint, Integer};

use crate::data::number_types::traits::factorization::{
    Divisor, Factorizable, Factorization, InvalidInput, SmallestDivisor,
};

/// Whether `candidate * candidate <= n`, computed without the square.
///
/// For positive integers, `f * f <= n` exactly when `f <= n / f` (rounding down), and the latter
/// doesn't overflow for fixed width types close to their maximum.
fn within_square_root<T: Integer>(candidate: &T, n: &T) -> bool {
    *candidate <= n.div_floor(candidate)
}

/// Reject values that have no smallest divisor.
fn check_domain<T: Integer + Clone + From<u8>>(n: &T) -> Result<(), InvalidInput<T>> {
    if *n < T::from(2) {
        Err(InvalidInput { value: n.clone() })
    } else {
        Ok(())
    }
}

/// Smallest divisor of `n` that is at least 2, if there is one below the square root.
///
/// Requires `n >= 2`.
fn trial_division<T: Integer + Clone + From<u8>>(n: &T) -> Option<T> {
    debug_assert!(*n >= T::from(2));

    if n.is_even() {
        return Some(T::from(2));
    }

    let mut candidate = T::from(3);
    while within_square_root(&candidate, n) {
        if n.is_multiple_of(&candidate) {
            return Some(candidate);
        }
        candidate = candidate + T::from(2);
    }

    None
}

/// All prime factors of `n` in ascending order, repeated according to their multiplicity.
///
/// Requires `n >= 2`.
fn prime_factors<T: Integer + Clone + From<u8>>(n: &T) -> Vec<T> {
    debug_assert!(*n >= T::from(2));

    let two = T::from(2);
    let mut rest = n.clone();
    let mut primes = Vec::new();

    while rest.is_even() {
        rest = rest.div_floor(&two);
        primes.push(two.clone());
    }

    // Every composite left over has a factor below its square root, which would have been
    // divided out already.
    let mut candidate = T::from(3);
    while within_square_root(&candidate, &rest) {
        while rest.is_multiple_of(&candidate) {
            rest = rest.div_floor(&candidate);
            primes.push(candidate.clone());
        }
        candidate = candidate + two.clone();
    }

    if !rest.is_one() {
        primes.push(rest);
    }

    primes
}

macro_rules! impl_trial_division {
    ($t:ty) => {
        impl SmallestDivisor for $t {
            fn smallest_divisor(&self) -> Result<Divisor<Self>, InvalidInput<Self>> {
                check_domain(self)?;

                Ok(match trial_division(self) {
                    Some(divisor) => Divisor::Found(divisor),
                    None => Divisor::Prime,
                })
            }
        }

        impl Factorizable for $t {
            type Factor = Self;
            type Power = u32;

            fn factorize(&self) -> Result<Factorization<Self::Factor, Self::Power>, InvalidInput<Self>> {
                check_domain(self)?;

                Ok(Factorization::from_sorted_primes(prime_factors(self)))
            }
        }
    }
}

impl_trial_division!(u8);
impl_trial_division!(u16);
impl_trial_division!(u32);
impl_trial_division!(u64);
impl_trial_division!(u128);
impl_trial_division!(usize);
impl_trial_division!(i32);
impl_trial_division!(i64);
impl_trial_division!(i128);
impl_trial_division!(BigUint);
impl_trial_division!(BigInt);
