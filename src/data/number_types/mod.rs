//! # Number types
//!
//! Traits describing what can be computed about a number, and their implementations for the
//! primitive and arbitrary precision integers.
pub mod integer;
pub mod traits;
