//! # Integers
//!
//! Fixed size and arbitrary precision, smallest divisors and factorization by trial division.
pub mod factorization;
