//! Negamax search with alpha-beta pruning
//!
//! This module implements the exhaustive game-tree search. Values are
//! exact game-theoretic results from the side to move's perspective:
//! +1 for a forced win, -1 for a forced loss, 0 for a forced draw. The
//! search explores moves in place (place a mark, recurse, clear the cell)
//! and memoizes resolved positions in a [`TransTable`].
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::{Searcher, TransTable};
//!
//! let mut tt = TransTable::new();
//! let mut searcher = Searcher::new(&mut tt);
//!
//! // Optimal play from the empty board is a draw
//! let result = searcher.search_root(&mut Board::new(), Mark::X);
//! assert_eq!(result.value, 0);
//! assert!(result.best_move.is_some());
//! ```

use log::trace;

use super::key;
use super::tt::{Bound, TransTable};
use crate::board::{Board, Mark, CELLS};
use crate::rules;

/// Score bound strictly above the highest achievable value
pub const INF: i32 = 2;

/// Recursion ceiling. A game lasts at most 9 plies, so this is a hard
/// stop no legal search reaches, not a truncation depth.
const MAX_DEPTH: i8 = 12;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes visited, terminal nodes included
    pub nodes: u64,
    /// Transposition-table probes
    pub tt_probes: u64,
    /// Probes that returned a usable value
    pub tt_hits: u64,
    /// Move loops ended early by an alpha-beta cutoff
    pub beta_cutoffs: u64,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best cell index, `None` when the position offered no candidate move
    pub best_move: Option<usize>,
    /// Value of the position for the side that moved, meaningful only
    /// when `best_move` is `Some`
    pub value: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Negamax searcher over a borrowed transposition table.
///
/// The searcher owns no position state; boards are mutated in place
/// through `&mut` and restored before every return, so a single stack
/// array serves the entire tree walk.
pub struct Searcher<'a> {
    tt: &'a mut TransTable,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(tt: &'a mut TransTable) -> Self {
        Self {
            tt,
            stats: SearchStats::default(),
        }
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Game-theoretic value of `board` with `to_move` to play, under
    /// optimal play by both sides.
    ///
    /// `alpha`/`beta` bound the window of interest; callers start from
    /// `(-INF, INF)`. `depth` counts plies from the root of this call
    /// chain and only feeds the recursion ceiling.
    pub fn search_value(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        mut alpha: i32,
        beta: i32,
        depth: i8,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth > MAX_DEPTH {
            return 0;
        }

        // Terminal: a completed line decides the game. The evaluator
        // reports the owning mark; fold it into the mover's perspective.
        if let Some(mark) = rules::winner(board) {
            return if mark == to_move { 1 } else { -1 };
        }

        // No moves left: draw
        if board.is_full() {
            return 0;
        }

        let key = key::encode(board);
        self.stats.tt_probes += 1;
        if let Some(value) = self.tt.probe(key, to_move, alpha, beta) {
            self.stats.tt_hits += 1;
            return value;
        }

        let alpha_orig = alpha;
        let mut best = -INF;

        for idx in 0..CELLS {
            if !board.is_empty(idx) {
                continue;
            }
            board.place(idx, to_move);
            let value = -self.search_value(board, to_move.opponent(), -beta, -alpha, depth + 1);
            board.clear(idx);

            if value > best {
                best = value;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        // The value of a playable position is already in {-1, 0, +1};
        // the clamp guards the stored range if the window ever widens.
        let best = best.clamp(-1, 1);

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(key, to_move, best, bound);

        best
    }

    /// Evaluate every empty cell as a root move and keep the best.
    ///
    /// Each candidate is searched with a fresh full window; ties resolve
    /// to the lowest cell index because only strict improvement replaces
    /// the running best.
    pub fn search_root(&mut self, board: &mut Board, to_move: Mark) -> SearchResult {
        let mut best_move = None;
        let mut best_value = -INF;

        for idx in 0..CELLS {
            if !board.is_empty(idx) {
                continue;
            }
            board.place(idx, to_move);
            let value = -self.search_value(board, to_move.opponent(), -INF, INF, 0);
            board.clear(idx);

            trace!("root candidate {} -> {}", idx, value);

            if value > best_value {
                best_value = value;
                best_move = Some(idx);
            }
        }

        SearchResult {
            best_move,
            value: best_value,
            stats: self.stats,
        }
    }
}
