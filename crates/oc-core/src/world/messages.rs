//! Player-facing narration
//!
//! Messages are collected per turn and kept in a bounded history. The front
//! end decides how to show them.

use std::collections::VecDeque;

/// Lines kept in the permanent history
const HISTORY_LEN: usize = 200;

/// Message log
#[derive(Debug, Clone, Default)]
pub struct Messages {
    /// Messages for the current turn
    pending: Vec<String>,

    /// Permanent message history
    history: VecDeque<String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the current turn
    pub fn push(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(target: "ocala::narration", "{}", msg);
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(msg.clone());
        self.pending.push(msg);
    }

    /// Messages since the last [`Messages::clear`]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Clear the current turn's messages
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.history.back().map(String::as_str)
    }

    /// True if any message of the current turn contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.pending.iter().any(|m| m.contains(needle))
    }
}
