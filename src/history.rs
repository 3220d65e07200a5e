//! Bounded log of recent searches.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept; the oldest entry is evicted first.
pub const HISTORY_CAPACITY: usize = 50;

/// Terms with this many characters or fewer are not recorded.
const MIN_TERM_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub term: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(rename = "results")]
    pub result_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<SearchHistoryEntry>,
}

impl SearchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from persisted entries, keeping only the most recent
    /// [`HISTORY_CAPACITY`] of them.
    pub fn from_entries(entries: impl IntoIterator<Item = SearchHistoryEntry>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        history
    }

    /// Record `term` with the current wall-clock time.
    pub fn record(&mut self, term: &str, result_count: usize) -> bool {
        self.record_at(term, result_count, chrono::Utc::now().timestamp_millis())
    }

    /// Record `term` with an explicit timestamp. Returns whether an entry was
    /// appended.
    pub fn record_at(&mut self, term: &str, result_count: usize, timestamp: i64) -> bool {
        if term.chars().count() <= MIN_TERM_CHARS {
            return false;
        }
        self.push(SearchHistoryEntry {
            term: term.to_string(),
            timestamp,
            result_count,
        });
        true
    }

    fn push(&mut self, entry: SearchHistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &SearchHistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&SearchHistoryEntry> {
        self.entries.back()
    }
}
