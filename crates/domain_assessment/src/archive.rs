//! Audit archive of finalized assessments
//!
//! Append-only and newest first. Entries live for the lifetime of the
//! running session; nothing is persisted.

use serde::Serialize;

use crate::assessment::AuditEntry;

/// Ordered record of finalized assessments
#[derive(Debug, Default)]
pub struct AuditArchive {
    /// Oldest first; readers see the reverse
    entries: Vec<AuditEntry>,
}

/// Archive contents as seen by a reader
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum History {
    /// No assessment has been finalized yet
    Empty,
    /// Finalized assessments, newest first
    Entries(Vec<AuditEntry>),
}

impl History {
    pub fn is_empty(&self) -> bool {
        matches!(self, History::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            History::Empty => 0,
            History::Entries(entries) => entries.len(),
        }
    }

    /// Entries newest first; empty slice for `Empty`
    pub fn entries(&self) -> &[AuditEntry] {
        match self {
            History::Empty => &[],
            History::Entries(entries) => entries,
        }
    }
}

impl AuditArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at the head
    pub fn append(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries, newest first
    pub fn list(&self) -> Vec<&AuditEntry> {
        self.entries.iter().rev().collect()
    }

    /// The most recently finalized entry
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned snapshot with an explicit empty state
    pub fn history(&self) -> History {
        if self.entries.is_empty() {
            History::Empty
        } else {
            History::Entries(self.entries.iter().rev().cloned().collect())
        }
    }

    /// Iterates oldest first, for aggregation
    pub(crate) fn iter_chronological(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }
}
