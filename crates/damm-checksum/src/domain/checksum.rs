//! Check digit computation and validation
//!
//! Digit strings are folded character by character through the quasigroup.
//! The first non-digit character stops the fold.

use crate::constants::{DIGIT_CHARS, INITIAL_STATE, ORDER};
use crate::domain::quasigroup::{advance, fold_digits};
use thiserror::Error;

/// Check digit errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DammError {
    /// A character outside '0'-'9' was found
    #[error("digit strings must contain digits only: found {found:?} at position {position}")]
    InvalidInput {
        /// Zero-based character index of the offending character
        position: usize,
        /// The offending character
        found: char,
    },
}

/// Compute the final accumulator state for a digit string
///
/// For a string without a check digit this is the check digit value; for a
/// string with a correct check digit appended it is 0.
///
/// # Errors
/// Returns [`DammError::InvalidInput`] for the first character that is not
/// an ASCII decimal digit.
pub fn check_digit_value(digits: &str) -> Result<u8, DammError> {
    let mut state = INITIAL_STATE;
    for (position, c) in digits.chars().enumerate() {
        let value = match c {
            '0'..='9' => c as u8 - b'0',
            _ => return Err(DammError::InvalidInput { position, found: c }),
        };
        state = advance(state, value);
    }
    Ok(state)
}

/// Compute the check digit for a digit string
///
/// The empty string has check digit `'0'`, and leading zeros never change
/// the result.
///
/// # Example
/// ```
/// use damm_checksum::check_digit;
///
/// assert_eq!(check_digit("572"), Ok('4'));
/// assert!(check_digit("12a45").is_err());
/// ```
pub fn check_digit(digits: &str) -> Result<char, DammError> {
    let value = check_digit_value(digits)?;
    Ok(DIGIT_CHARS[value as usize])
}

/// Validate a digit string that ends with its check digit
///
/// Returns `false` both for a wrong check digit and for any non-digit
/// character.
///
/// # Example
/// ```
/// use damm_checksum::validate;
///
/// assert!(validate("5724"));
/// assert!(!validate("5727"));
/// assert!(!validate("12a450"));
/// ```
pub fn validate(digits: &str) -> bool {
    matches!(check_digit_value(digits), Ok(INITIAL_STATE))
}

/// Return `digits` with its check digit appended
pub fn append_check_digit(digits: &str) -> Result<String, DammError> {
    let c = check_digit(digits)?;
    let mut out = String::with_capacity(digits.len() + 1);
    out.push_str(digits);
    out.push(c);
    Ok(out)
}

/// Compute the check digit over digit values (0-9)
///
/// Returns `None` if any value is out of range.
pub fn check_digit_of_values(values: &[u8]) -> Option<u8> {
    if values.iter().any(|&v| v as usize >= ORDER) {
        return None;
    }
    Some(fold_digits(values.iter().copied()))
}

/// Damm checksum over the fixed quasigroup
///
/// Stateless handle for code that prefers a value to free functions. Every
/// call is independent, so a single instance can be shared across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DammChecksum;

impl DammChecksum {
    pub fn new() -> Self {
        Self
    }

    /// See [`check_digit`]
    pub fn check_digit(&self, digits: &str) -> Result<char, DammError> {
        check_digit(digits)
    }

    /// See [`validate`]
    pub fn validate(&self, digits: &str) -> bool {
        validate(digits)
    }
}
