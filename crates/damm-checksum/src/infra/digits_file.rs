//! Digit file I/O operations
//!
//! A digit file is UTF-8 text with one digit string per line. Surrounding
//! whitespace is trimmed, blank lines are skipped, and lines starting with
//! `#` are comments. Line contents are not checked for digits here.

use crate::constants::COMMENT_PREFIX;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// One entry read from a digit file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitLine {
    /// 1-based line number in the source
    pub line_number: usize,
    /// Trimmed line content
    pub digits: String,
}

/// Digit file errors
#[derive(Debug, Error)]
pub enum DigitsFileError {
    /// I/O error (includes invalid UTF-8)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read digit lines from any buffered reader
pub fn read_digit_lines_from<R: BufRead>(reader: R) -> Result<Vec<DigitLine>, DigitsFileError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }
        entries.push(DigitLine {
            line_number: index + 1,
            digits: trimmed.to_string(),
        });
    }

    Ok(entries)
}

/// Read digit lines from a file
pub fn read_digit_lines(path: impl AsRef<Path>) -> Result<Vec<DigitLine>, DigitsFileError> {
    let file = File::open(path.as_ref())?;
    read_digit_lines_from(BufReader::new(file))
}
