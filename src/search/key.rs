//! Canonical position keys for transposition-table addressing
//!
//! Every board maps to a unique integer in `[0, 3^9)` by reading the nine
//! cells as base-3 digits (`sign + 1`: O is 0, empty is 1, X is 2). The
//! encoding is a bijection over all 19,683 digit strings, so unlike a
//! Zobrist hash it needs no collision handling: equal keys mean equal
//! boards, full stop.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::key;
//!
//! let mut board = Board::new();
//! let before = key::encode(&board);
//!
//! // Exploring and retracting a move restores the key exactly
//! board.place(4, Mark::X);
//! assert_ne!(key::encode(&board), before);
//! board.clear(4);
//! assert_eq!(key::encode(&board), before);
//! ```

use crate::board::{Board, CELLS};

/// Number of distinct board encodings (3^9)
pub const KEY_SPACE: usize = 19_683;

/// Encode a board as its canonical key.
#[must_use]
pub fn encode(board: &Board) -> usize {
    let mut key = 0;
    for idx in 0..CELLS {
        let digit = (board.get(idx).sign() + 1) as usize;
        key = key * 3 + digit;
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    /// Inverse of `encode`, for the bijection check below.
    fn decode(mut key: usize) -> Board {
        let mut board = Board::new();
        for idx in (0..CELLS).rev() {
            let digit = key % 3;
            key /= 3;
            board.place(idx, Mark::from_sign(digit as i32 - 1));
        }
        board
    }

    #[test]
    fn test_empty_board_key() {
        // All nine digits are 1: sum of 3^i for i in 0..9
        assert_eq!(encode(&Board::new()), 9_841);
    }

    #[test]
    fn test_keys_stay_in_range() {
        let all_x = Board::from_cells(&[1; 9]).unwrap();
        let all_o = Board::from_cells(&[-1; 9]).unwrap();
        assert_eq!(encode(&all_o), 0);
        assert_eq!(encode(&all_x), KEY_SPACE - 1);
    }

    #[test]
    fn test_single_cell_changes_key() {
        let mut board = Board::new();
        let empty_key = encode(&board);
        for idx in 0..CELLS {
            for mark in [Mark::X, Mark::O] {
                board.place(idx, mark);
                assert_ne!(encode(&board), empty_key);
                board.clear(idx);
            }
        }
        assert_eq!(encode(&board), empty_key);
    }

    #[test]
    fn test_encoding_is_a_bijection() {
        // Every key decodes to a board that encodes back to itself,
        // covering the full 19,683-state space.
        for key in 0..KEY_SPACE {
            assert_eq!(encode(&decode(key)), key);
        }
    }
}
