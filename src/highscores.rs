//! High score leaderboard
//!
//! Five entries, descending by score, ties kept in insertion order.
//! Persisted through the key-value store port.

use serde::{Deserialize, Serialize};

use crate::consts::HIGH_SCORES_STORAGE_KEY;
use crate::persistence::{self, KeyValueStore};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player-entered name
    pub name: String,
    /// Final score of the attempt
    pub score: u64,
    /// Display date, formatted by the host
    pub date: String,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // At capacity: must beat the current minimum
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score (if it qualifies), evicting the lowest entry when at
    /// capacity. Returns the rank achieved (1-indexed) or None.
    pub fn add_score(
        &mut self,
        name: impl Into<String>,
        score: u64,
        date: impl Into<String>,
    ) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.into(),
            score,
            date: date.into(),
        };

        // Insertion point: after any existing entry with an equal score, so
        // ties stay in insertion order
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from the store; absent or corrupted history loads as empty
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let scores: Self = persistence::load_or_default(store, HIGH_SCORES_STORAGE_KEY);
        log::info!("loaded {} high scores", scores.entries.len());
        scores
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        persistence::save(store, HIGH_SCORES_STORAGE_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn scores_of(board: &HighScores) -> Vec<u64> {
        board.entries.iter().map(|e| e.score).collect()
    }

    #[test]
    fn test_below_capacity_always_inserts() {
        let mut board = HighScores::new();
        assert_eq!(board.add_score("a", 0, "today"), Some(1));
        assert_eq!(board.add_score("b", 5, "today"), Some(1));
        assert_eq!(scores_of(&board), vec![5, 0]);
    }

    #[test]
    fn test_eviction_keeps_top_five() {
        let mut board = HighScores::new();
        for (i, score) in [50, 80, 30, 90, 10, 70, 20].into_iter().enumerate() {
            board.add_score(format!("p{i}"), score, "today");
        }
        // 10 and 20 fall off the bottom
        assert_eq!(scores_of(&board), vec![90, 80, 70, 50, 30]);
    }

    #[test]
    fn test_at_capacity_requires_beating_the_minimum() {
        let mut board = HighScores::new();
        for score in [50, 40, 30, 20, 10] {
            board.add_score("x", score, "today");
        }
        assert!(!board.qualifies(10));
        assert_eq!(board.add_score("x", 10, "today"), None);
        assert_eq!(board.add_score("x", 11, "today"), Some(5));
        assert_eq!(scores_of(&board), vec![50, 40, 30, 20, 11]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = HighScores::new();
        board.add_score("first", 40, "today");
        board.add_score("second", 40, "today");
        board.add_score("third", 60, "today");
        assert_eq!(board.entries[0].name, "third");
        assert_eq!(board.entries[1].name, "first");
        assert_eq!(board.entries[2].name, "second");
    }

    #[test]
    fn test_round_trip_and_corruption() {
        let mut board = HighScores::new();
        board.add_score("ana", 120, "2025-07-01");
        board.add_score("leo", 90, "2025-07-02");

        let mut store = MemoryStore::new();
        board.save(&mut store);
        let reloaded = HighScores::load(&store);
        assert_eq!(reloaded.entries, board.entries);

        store.set(HIGH_SCORES_STORAGE_KEY, "[[[".to_string());
        let recovered = HighScores::load(&store);
        assert!(recovered.is_empty());
    }
}
