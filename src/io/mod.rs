//! # Reading and writing
//!
//! Integer lists go in, one line of output per value comes out.
pub mod error;
pub mod list;
pub mod output;
