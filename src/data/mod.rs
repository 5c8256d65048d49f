//! # Data
//!
//! Number types and the operations defined on them.
pub mod number_types;
