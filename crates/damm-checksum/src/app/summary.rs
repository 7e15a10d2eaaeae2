//! Batch validation summary

/// Counts from validating a batch of digit strings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of inputs checked
    pub total: usize,
    /// Inputs that passed validation
    pub valid: usize,
    /// Inputs that failed validation (wrong check digit or non-digit symbol)
    pub invalid: usize,
}

impl BatchSummary {
    /// Whether every input passed
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    /// Fraction of valid inputs (0.0 for an empty batch)
    pub fn valid_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.valid as f64 / self.total as f64
        }
    }
}

/// Summarize validation results
pub fn summarize(results: &[bool]) -> BatchSummary {
    let valid = results.iter().filter(|&&ok| ok).count();
    BatchSummary {
        total: results.len(),
        valid,
        invalid: results.len() - valid,
    }
}
