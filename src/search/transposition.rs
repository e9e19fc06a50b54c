//! Transposition table for caching alpha-beta results
//!
//! A table lives for exactly one top-level search call. Values found under a
//! narrowed window are only bounds, so every entry records how its value may
//! be used.

use std::{collections::HashMap, hash::Hash};

/// How a stored value relates to the true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The search completed inside the window
    Exact,
    /// True value >= stored value (the node failed high)
    Lower,
    /// True value <= stored value (the node failed low)
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: i32,
    bound: Bound,
}

/// Memo of evaluated positions keyed by `K`.
///
/// Exhaustive search keys on (canonical key, mover, ply); depth-limited
/// search keys on (canonical key, remaining budget).
#[derive(Debug)]
pub struct TranspositionTable<K> {
    entries: HashMap<K, Entry>,
    hits: usize,
}

impl<K: Eq + Hash> TranspositionTable<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }

    /// Look up a value usable for the window `(alpha, beta)`.
    pub fn probe(&mut self, key: &K, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(key)?;
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.value >= beta,
            Bound::Upper => entry.value <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.value)
        } else {
            None
        }
    }

    /// Record `value` computed with the window the node was entered with.
    ///
    /// An existing entry is only replaced by an exact one.
    pub fn store(&mut self, key: K, value: i32, alpha: i32, beta: i32) {
        let bound = Bound::classify(value, alpha, beta);
        let entry = Entry { value, bound };
        self.entries
            .entry(key)
            .and_modify(|existing| {
                if bound == Bound::Exact {
                    *existing = entry;
                }
            })
            .or_insert(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of probes that returned a usable value
    pub fn hits(&self) -> usize {
        self.hits
    }
}

impl<K: Eq + Hash> Default for TranspositionTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_against_window() {
        assert_eq!(Bound::classify(0, -1, 1), Bound::Exact);
        assert_eq!(Bound::classify(1, -1, 1), Bound::Lower);
        assert_eq!(Bound::classify(-1, -1, 1), Bound::Upper);
    }

    #[test]
    fn test_exact_entries_always_hit() {
        let mut tt = TranspositionTable::new();
        tt.store("a", 0, -2, 2);
        assert_eq!(tt.probe(&"a", -1, 1), Some(0));
        assert_eq!(tt.hits(), 1);
    }

    #[test]
    fn test_lower_bound_only_hits_above_beta() {
        let mut tt = TranspositionTable::new();
        // value 1 reached with beta = 0: fail high
        tt.store("a", 1, -2, 0);
        assert_eq!(tt.probe(&"a", -2, 2), None);
        assert_eq!(tt.probe(&"a", -2, 1), Some(1));
    }

    #[test]
    fn test_upper_bound_only_hits_below_alpha() {
        let mut tt = TranspositionTable::new();
        tt.store("a", -1, 0, 2);
        assert_eq!(tt.probe(&"a", -2, 2), None);
        assert_eq!(tt.probe(&"a", -1, 2), Some(-1));
    }

    #[test]
    fn test_exact_entry_replaces_bound_but_not_vice_versa() {
        let mut tt = TranspositionTable::new();
        tt.store("a", 1, -2, 0);
        tt.store("a", 0, -2, 2);
        assert_eq!(tt.probe(&"a", -2, 2), Some(0));
        tt.store("a", 1, -2, 0);
        assert_eq!(tt.probe(&"a", -2, 2), Some(0));
        assert_eq!(tt.len(), 1);
    }
}
