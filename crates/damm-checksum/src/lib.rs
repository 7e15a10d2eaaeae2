//! damm-checksum - Decimal check digits using the Damm algorithm
//!
//! This crate provides functionality to:
//! - Compute the check digit for a string of decimal digits
//! - Validate a digit string that already carries its check digit
//! - Process batches of digit strings in parallel and read them from files
//!
//! The checksum is a fold over a fixed 10x10 totally anti-symmetric quasigroup.
//! It detects every single-digit error and every adjacent transposition, and
//! leading zeros never change the result.

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::checksum::{
    DammChecksum, DammError, append_check_digit, check_digit, check_digit_of_values,
    check_digit_value, validate,
};
pub use domain::quasigroup::{advance, fold_digits};
