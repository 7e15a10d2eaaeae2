//! Parallel batch processing
//!
//! The quasigroup is a constant and every call owns its accumulator, so
//! inputs can be spread across rayon worker threads with no coordination.
//! Output order always matches input order.

use crate::domain::checksum::{DammError, check_digit, validate};
use rayon::prelude::*;

/// Compute check digits for many digit strings in parallel
///
/// # Arguments
/// * `inputs` - Digit strings without check digits
///
/// # Returns
/// One result per input, in input order
pub fn check_digits_parallel<S>(inputs: &[S]) -> Vec<Result<char, DammError>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|digits| check_digit(digits.as_ref()))
        .collect()
}

/// Validate many digit strings (check digit included) in parallel
pub fn validate_parallel<S>(inputs: &[S]) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|digits| validate(digits.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digits_parallel_preserves_order() {
        let inputs = ["572", "", "12a45", "12345678901"];
        let results = check_digits_parallel(&inputs);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0], Ok('4'));
        assert_eq!(results[1], Ok('0'));
        assert!(matches!(
            results[2],
            Err(DammError::InvalidInput { position: 2, .. })
        ));
        assert_eq!(results[3], Ok('8'));
    }

    #[test]
    fn test_validate_parallel_preserves_order() {
        let inputs = vec![
            "5724".to_string(),
            "5727".to_string(),
            "12a450".to_string(),
        ];
        assert_eq!(validate_parallel(&inputs), vec![true, false, false]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inputs: Vec<String> = (0..5000u64).map(|n| (n * 7919).to_string()).collect();

        let parallel = check_digits_parallel(&inputs);
        let sequential: Vec<_> = inputs.iter().map(|s| check_digit(s)).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_parallel_empty_batch() {
        let inputs: [&str; 0] = [];
        assert!(check_digits_parallel(&inputs).is_empty());
        assert!(validate_parallel(&inputs).is_empty());
    }
}
