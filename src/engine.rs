//! Engine facade tying the search components together
//!
//! [`Engine`] is the entry point hosts call: give it a board and the side
//! to find a move for, get back the optimal empty-cell index. All calls
//! share the process-wide transposition table, so positions resolved for
//! one request answer instantly in every later one.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::engine::Engine;
//!
//! let mut engine = Engine::new();
//!
//! // X has two in the top row; the engine completes the line
//! let board = Board::from_cells(&[1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
//! assert_eq!(engine.best_move(&board, Mark::X), Some(2));
//!
//! // A finished game has no move to offer
//! let done = Board::from_cells(&[1, -1, 1, -1, 1, -1, -1, 1, -1]).unwrap();
//! assert_eq!(engine.best_move(&done, Mark::X), None);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Mark};
use crate::rules;
use crate::search::{tt, Searcher};

/// Result of a move request with search statistics.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Best cell index, or `None` when the position offers no move
    pub best_move: Option<usize>,
    /// Value of the position for the requesting side after the search
    pub value: i32,
    /// Nodes visited by this request (0 on a no-move answer)
    pub nodes: u64,
    /// Wall-clock time of the request in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    /// Answer for a request with nothing to search
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            value: 0,
            nodes: 0,
            time_ms,
        }
    }
}

/// Move engine over the process-wide transposition table.
///
/// The engine holds no per-game state; it is a pure function of the board
/// and side it is handed, plus the shared cache (an optimization that
/// never changes results, only latency).
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Find the optimal move for `to_move` on `board`.
    ///
    /// Returns `None` when the game is already decided, when no empty
    /// cell remains, or when `to_move` is not an actual side. The caller
    /// owns game flow; asking for a move in a finished game is reported,
    /// not treated as a failure.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, to_move: Mark) -> Option<usize> {
        self.best_move_with_stats(board, to_move).best_move
    }

    /// Find the optimal move and return search statistics with it.
    #[must_use]
    pub fn best_move_with_stats(&mut self, board: &Board, to_move: Mark) -> MoveResult {
        let start = Instant::now();

        if !to_move.is_player()
            || rules::winner(board).is_some()
            || board.is_full()
        {
            return MoveResult::no_move(start.elapsed().as_millis() as u64);
        }

        // Lock scope is the whole root search. A poisoned lock still
        // holds valid exact values, so recover instead of propagating.
        let mut table = tt::shared()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut work = *board;
        let mut searcher = Searcher::new(&mut table);
        let result = searcher.search_root(&mut work, to_move);
        drop(table);

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "best_move {:?}: {:?} value {} ({} nodes, {} tt hits, {} ms)",
            to_move, result.best_move, result.value, result.stats.nodes, result.stats.tt_hits, time_ms
        );

        MoveResult {
            best_move: result.best_move,
            value: result.value,
            nodes: result.stats.nodes,
            time_ms,
        }
    }
}

/// Raw host boundary: a 9-entry row-major cell buffer (+1 X, -1 O,
/// 0 empty) and the side to move for (+1 or -1).
///
/// Returns the chosen cell index, or `None` for a malformed buffer
/// length, a side that is not +/-1, a decided game, or a full board.
/// Cell values outside {-1, 0, +1} read as empty rather than failing.
#[must_use]
pub fn best_move_from_cells(cells: &[i32], side: i32) -> Option<usize> {
    let board = Board::from_cells(cells)?;
    let to_move = Mark::from_sign(side);
    Engine::new().best_move(&board, to_move)
}
