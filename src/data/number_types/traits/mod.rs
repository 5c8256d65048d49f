//! # Traits
pub mod factorization;
