//! Transposition table for caching search results
//!
//! The table stores the game-theoretic value of every (position, side to
//! move) pair the search has resolved, indexed directly by the canonical
//! board key. At 19,683 keys x 2 sides it covers the entire state space,
//! so entries are never evicted: a stored value is valid for the rest of
//! the process lifetime.
//!
//! Values can be one-sided bounds rather than exact results when the
//! search window clipped the move loop (beta cutoff or fail-low), so each
//! entry carries a [`Bound`] flag and [`TransTable::probe`] only returns a
//! value the caller's window can actually use.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Mark;
//! use tictactoe::search::{Bound, TransTable};
//!
//! let mut tt = TransTable::new();
//! tt.store(9_841, Mark::X, 0, Bound::Exact);
//!
//! assert_eq!(tt.probe(9_841, Mark::X, -2, 2), Some(0));
//! assert_eq!(tt.probe(9_841, Mark::O, -2, 2), None);
//! ```

use std::sync::Mutex;

use once_cell::sync::Lazy;

use super::key::KEY_SPACE;
use crate::board::Mark;

/// How a stored value relates to the true value of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Exact game value: the move loop ran to completion inside the window
    Exact,
    /// Lower bound: a beta cutoff ended the move loop early
    Lower,
    /// Upper bound: every move failed low against alpha
    Upper,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    /// Game value in {-1, 0, +1} from the side to move's perspective
    pub value: i8,
    /// Value classification under the window that produced it
    pub bound: Bound,
}

/// Table usage statistics
#[derive(Debug, Clone, Copy)]
pub struct TtStats {
    /// Total slots (both sides of every key)
    pub slots: usize,
    /// Slots holding a resolved value
    pub used: usize,
}

/// Flat transposition table addressed by `[key][side]`.
///
/// Unknown slots are `None`; there is no sentinel value to confuse with a
/// real result. Indexing is direct -- the canonical key is a bijection,
/// so no hash verification or replacement policy is needed.
pub struct TransTable {
    entries: Vec<[Option<TtEntry>; 2]>,
}

/// Slot index for a side: O probes slot 0, X probes slot 1.
#[inline]
fn side_index(to_move: Mark) -> usize {
    debug_assert!(to_move.is_player());
    usize::from(to_move == Mark::X)
}

impl TransTable {
    /// Create a table with every slot unknown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![[None; 2]; KEY_SPACE],
        }
    }

    /// Probe for a (position, side) pair under the caller's search window.
    ///
    /// Returns the stored value only when the window can use it:
    /// an exact value always, a lower bound when `value >= beta`, an
    /// upper bound when `value <= alpha`. Anything else is a miss and
    /// the caller searches the node normally.
    #[must_use]
    pub fn probe(&self, key: usize, to_move: Mark, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries[key][side_index(to_move)]?;
        let value = i32::from(entry.value);
        match entry.bound {
            Bound::Exact => Some(value),
            Bound::Lower if value >= beta => Some(value),
            Bound::Upper if value <= alpha => Some(value),
            _ => None,
        }
    }

    /// Store a resolved value for a (position, side) pair.
    ///
    /// Only non-terminal positions with at least one empty cell are ever
    /// stored; terminal and full boards are resolved before the search
    /// reaches its probe.
    pub fn store(&mut self, key: usize, to_move: Mark, value: i32, bound: Bound) {
        debug_assert!((-1..=1).contains(&value));
        self.entries[key][side_index(to_move)] = Some(TtEntry {
            value: value as i8,
            bound,
        });
    }

    /// Reset every slot to unknown.
    pub fn clear(&mut self) {
        self.entries.fill([None; 2]);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TtStats {
        let used = self
            .entries
            .iter()
            .flatten()
            .filter(|slot| slot.is_some())
            .count();
        TtStats {
            slots: KEY_SPACE * 2,
            used,
        }
    }
}

impl Default for TransTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide table shared by every [`Engine`](crate::engine::Engine)
/// call, created lazily on first use and alive for the process lifetime.
///
/// The mutex makes concurrent hosts safe without external coordination;
/// the engine locks it once per root search, not per node. Stored values
/// are position-invariant, so interleaved writers can never make an entry
/// stale.
static SHARED: Lazy<Mutex<TransTable>> = Lazy::new(|| Mutex::new(TransTable::new()));

/// Access the process-wide shared table.
#[must_use]
pub fn shared() -> &'static Mutex<TransTable> {
    &SHARED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_probe_exact() {
        let mut tt = TransTable::new();
        tt.store(42, Mark::X, 1, Bound::Exact);

        assert_eq!(tt.probe(42, Mark::X, -2, 2), Some(1));
        // Exact values hit under any window
        assert_eq!(tt.probe(42, Mark::X, 1, 2), Some(1));
        assert_eq!(tt.probe(42, Mark::X, -2, -1), Some(1));
    }

    #[test]
    fn test_unknown_slot_misses() {
        let tt = TransTable::new();
        assert_eq!(tt.probe(0, Mark::X, -2, 2), None);
        assert_eq!(tt.probe(KEY_SPACE - 1, Mark::O, -2, 2), None);
    }

    #[test]
    fn test_sides_are_separate_slots() {
        let mut tt = TransTable::new();
        tt.store(100, Mark::X, 1, Bound::Exact);

        assert_eq!(tt.probe(100, Mark::X, -2, 2), Some(1));
        assert_eq!(tt.probe(100, Mark::O, -2, 2), None);

        tt.store(100, Mark::O, -1, Bound::Exact);
        assert_eq!(tt.probe(100, Mark::O, -2, 2), Some(-1));
        assert_eq!(tt.probe(100, Mark::X, -2, 2), Some(1));
    }

    #[test]
    fn test_lower_bound_needs_beta_cutoff() {
        let mut tt = TransTable::new();
        tt.store(7, Mark::X, 0, Bound::Lower);

        // value (0) >= beta (0): usable
        assert_eq!(tt.probe(7, Mark::X, -2, 0), Some(0));
        // value (0) < beta (1): not usable
        assert_eq!(tt.probe(7, Mark::X, -2, 1), None);
    }

    #[test]
    fn test_upper_bound_needs_alpha_fail() {
        let mut tt = TransTable::new();
        tt.store(7, Mark::O, 0, Bound::Upper);

        // value (0) <= alpha (0): usable
        assert_eq!(tt.probe(7, Mark::O, 0, 2), Some(0));
        // value (0) > alpha (-1): not usable
        assert_eq!(tt.probe(7, Mark::O, -1, 2), None);
    }

    #[test]
    fn test_store_overwrites() {
        let mut tt = TransTable::new();
        tt.store(3, Mark::X, 0, Bound::Upper);
        tt.store(3, Mark::X, 1, Bound::Exact);
        assert_eq!(tt.probe(3, Mark::X, -2, 2), Some(1));
    }

    #[test]
    fn test_clear_resets_slots() {
        let mut tt = TransTable::new();
        tt.store(5, Mark::X, -1, Bound::Exact);
        assert_eq!(tt.stats().used, 1);

        tt.clear();
        assert_eq!(tt.probe(5, Mark::X, -2, 2), None);
        assert_eq!(tt.stats().used, 0);
    }

    #[test]
    fn test_stats_counts_both_sides() {
        let mut tt = TransTable::new();
        assert_eq!(tt.stats().slots, KEY_SPACE * 2);

        tt.store(1, Mark::X, 0, Bound::Exact);
        tt.store(1, Mark::O, 0, Bound::Exact);
        tt.store(2, Mark::X, 1, Bound::Lower);
        assert_eq!(tt.stats().used, 3);
    }

    #[test]
    fn test_shared_table_persists_across_locks() {
        {
            let mut tt = shared().lock().unwrap();
            tt.store(KEY_SPACE - 2, Mark::O, 0, Bound::Exact);
        }
        let tt = shared().lock().unwrap();
        assert_eq!(tt.probe(KEY_SPACE - 2, Mark::O, -2, 2), Some(0));
    }
}
