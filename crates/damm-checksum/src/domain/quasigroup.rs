//! Quasigroup operation and table properties
//!
//! The Damm checksum is a left fold of a single binary operation over the
//! input digits. This module provides that operation and the structural
//! checks that make the fold error-detecting.

use crate::constants::{INITIAL_STATE, ORDER, QUASIGROUP};

/// Operation table type (row = state, column = digit)
pub type Table = [[u8; ORDER]; ORDER];

/// Advance the accumulator by one digit
///
/// Both `state` and `digit` must be in 0-9.
#[inline]
pub fn advance(state: u8, digit: u8) -> u8 {
    debug_assert!((state as usize) < ORDER, "state out of range: {}", state);
    debug_assert!((digit as usize) < ORDER, "digit out of range: {}", digit);
    QUASIGROUP[state as usize][digit as usize]
}

/// Fold `advance` over digit values (0-9, not ASCII) starting from state 0
///
/// The result is the check digit of the sequence, or 0 if the sequence
/// already ends with a correct check digit.
pub fn fold_digits<I>(values: I) -> u8
where
    I: IntoIterator<Item = u8>,
{
    values.into_iter().fold(INITIAL_STATE, advance)
}

/// Check that every row and every column is a permutation of 0-9
pub fn is_latin_square(table: &Table) -> bool {
    for i in 0..ORDER {
        let mut row_seen = [false; ORDER];
        let mut col_seen = [false; ORDER];
        for j in 0..ORDER {
            let r = table[i][j] as usize;
            let c = table[j][i] as usize;
            if r >= ORDER || c >= ORDER || row_seen[r] || col_seen[c] {
                return false;
            }
            row_seen[r] = true;
            col_seen[c] = true;
        }
    }
    true
}

/// Check that `table[i][i] == 0` for every `i`
pub fn has_zero_diagonal(table: &Table) -> bool {
    (0..ORDER).all(|i| table[i][i] == 0)
}

/// Check weak total anti-symmetry
///
/// For every state `c` and digits `x != y`, `(c*x)*y != (c*y)*x`.
/// This is what guarantees that swapping two adjacent digits changes the
/// final state.
pub fn is_weakly_totally_antisymmetric(table: &Table) -> bool {
    for c in 0..ORDER {
        for x in 0..ORDER {
            for y in (x + 1)..ORDER {
                let xy = table[table[c][x] as usize][y];
                let yx = table[table[c][y] as usize][x];
                if xy == yx {
                    return false;
                }
            }
        }
    }
    true
}
