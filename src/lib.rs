//! Tic-tac-toe move engine
//!
//! An exhaustive search engine for 3x3 tic-tac-toe: given any legal
//! position and the side to move, it returns the optimal empty-cell
//! index. The search is a negamax with alpha-beta pruning over the full
//! game tree, memoized in a transposition table that covers the entire
//! 19,683-position state space, so every answer is exact -- a forced
//! win, loss, or draw, never a heuristic guess.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: fixed 9-cell board with in-place move application
//! - [`rules`]: win detection over the 8 fixed lines
//! - [`search`]: canonical position keys, transposition table, and the
//!   negamax search
//! - [`engine`]: the facade hosts call, plus the raw integer-buffer
//!   boundary
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{best_move_from_cells, Board, Engine, Mark};
//!
//! let mut engine = Engine::new();
//!
//! // X has two in the top row; the engine completes the line
//! let board = Board::from_cells(&[1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
//! assert_eq!(engine.best_move(&board, Mark::X), Some(2));
//!
//! // Hosts without typed boards use the raw boundary directly
//! assert_eq!(best_move_from_cells(&[1, 1, 0, -1, -1, 0, 0, 0, 0], 1), Some(2));
//! ```
//!
//! # Determinism
//!
//! Results are a pure function of (board, side to move). The shared
//! transposition table is an optimization, not observable state: a warm
//! cache changes latency, never the answer. Ties between equally good
//! moves resolve to the lowest cell index.

pub mod board;
pub mod engine;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, CELLS};
pub use engine::{best_move_from_cells, Engine, MoveResult};
pub use rules::{winner, winning_line};
pub use search::{SearchResult, SearchStats, Searcher, TransTable};
