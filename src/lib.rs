//! # Factors
//!
//! Smallest divisors and prime factorizations of integers by trial division, and a small wrapper
//! that times a closure the way the UNIX `time` command times a program.
//!
//! The divisor search lives in [`data::number_types`], the timing wrapper in [`timing`] and the
//! line oriented reading and printing of integer lists in [`io`].
#![warn(missing_docs)]

pub mod data;
pub mod io;
pub mod timing;
