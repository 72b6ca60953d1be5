//! # Byte-wide PEXT / PDEP lookup table generator
//!
//! This crate computes parallel bit extract (PEXT), parallel bit deposit (PDEP), and population count for all bytes and all 8-bit masks, and writes the results as static lookup tables in Rust source form.
//! The generated tables let code avoid these operations on targets without the BMI2 and POPCNT instructions.
//!
//! The `pextgen` binary writes the tables to [`generator::OUTPUT_FILE`] in the current directory:
//!
//! ```text
//! pextgen --module bits
//! ```
//!
//! # Notes
//!
//! * All computation is done at generation time. The generated file depends only on the module name.
//! * Only 8-bit values and masks are supported.

pub mod bits;
pub mod codegen;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod log;
pub mod tables;

pub use crate::error::{Error, Result};

#[cfg(test)]
mod internal;
