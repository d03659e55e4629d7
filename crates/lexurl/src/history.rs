use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::types::{HistoryEntry, Prediction};

pub const DEFAULT_CAPACITY: usize = 10;

/// URLs longer than this are shortened in history entries.
pub const MAX_URL_CHARS: usize = 50;

impl HistoryEntry {
    pub fn new(url: &str, timestamp: DateTime<Utc>, prediction: &Prediction) -> Self {
        Self {
            url: shorten(url),
            timestamp,
            label: prediction.label,
            confidence: prediction.confidence,
        }
    }
}

fn shorten(url: &str) -> String {
    match url.char_indices().nth(MAX_URL_CHARS) {
        Some((cut, _)) => format!("{}...", &url[..cut]),
        None => url.to_string(),
    }
}

/// Most recent analyses, newest first, bounded in size.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl AnalysisHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild from persisted entries (newest first), dropping any overflow.
    pub fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            tracing::debug!(evicted, "history full, dropped oldest entries");
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_vec(self) -> Vec<HistoryEntry> {
        self.entries.into()
    }
}
