//! Damm algorithm constants

// =============================================================================
// Digit alphabet
// =============================================================================

/// Number of symbols in the digit alphabet (and order of the quasigroup)
pub const ORDER: usize = 10;

/// Initial accumulator state, also the only accepting state for validation
pub const INITIAL_STATE: u8 = 0;

/// Character for each accumulator state
pub const DIGIT_CHARS: [char; ORDER] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

// =============================================================================
// Operation table
// =============================================================================

/// Totally anti-symmetric quasigroup of order 10 (H. Michael Damm, 2004)
///
/// Row index is the current accumulator state, column index is the next
/// input digit. Every row and every column is a permutation of 0-9, and the
/// main diagonal is all zeros.
pub const QUASIGROUP: [[u8; ORDER]; ORDER] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

// =============================================================================
// Digit files
// =============================================================================

/// Lines starting with this character are ignored when reading digit files
pub const COMMENT_PREFIX: char = '#';
