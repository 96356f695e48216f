//! Win condition checking
//!
//! A side wins by occupying all three cells of one of the 8 fixed lines
//! (3 rows, 3 columns, 2 diagonals). Lines are scanned in table order and
//! the first completed line decides the result; boards that are
//! unreachable in legal play (two completed lines for different sides)
//! are not rejected, they simply resolve to the earlier line.

use crate::board::{Board, Mark};

/// The 8 winning lines as cell-index triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the first completed line on the board.
///
/// Returns the owning mark together with the line's cell indices, for
/// hosts that highlight the winning three. `None` if no line is complete.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    for &line in &LINES {
        let [a, b, c] = line;
        let mark = board.get(a);
        if mark.is_player() && mark == board.get(b) && mark == board.get(c) {
            return Some((mark, line));
        }
    }
    None
}

/// Check for a winner.
///
/// Returns `Some(Mark)` if either side has a completed line, `None`
/// otherwise. A full board with no completed line is a draw, which this
/// function does not distinguish from an unfinished game; callers check
/// [`Board::is_full`] for that.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}
