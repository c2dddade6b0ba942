//! Scrolling game history shared by every frontend.
use std::collections::VecDeque;

/// How a history line should be emphasized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MessageLevel {
    #[default]
    Info,
    /// An ailment was cleared or the game was won.
    Success,
    /// A life was lost or an expression was rejected.
    Warning,
    Error,
}

/// One line of history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Round the line belongs to; `None` for session-level notices.
    pub round: Option<u32>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, round: Option<u32>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            round,
            level,
        }
    }

    /// Session-level notice with no round attached.
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Info)
    }
}

/// History that forgets its oldest lines once `capacity` is reached.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.push(MessageEntry::notice(text));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    /// Lines recorded for `round`, oldest first.
    pub fn for_round(&self, round: u32) -> impl Iterator<Item = &MessageEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.round == Some(round))
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
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

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(entries: impl Iterator<Item = &'a MessageEntry>) -> Vec<&'a str> {
        entries.map(|entry| entry.text.as_str()).collect()
    }

    #[test]
    fn oldest_line_is_forgotten_at_capacity() {
        let mut log = MessageLog::new(2);
        log.push_text("welcome");
        log.push(MessageEntry::new("Rolled 4 2 6", Some(1), MessageLevel::Info));
        log.push(MessageEntry::new("Hit! 7", Some(1), MessageLevel::Success));
        assert_eq!(texts(log.iter()), vec!["Rolled 4 2 6", "Hit! 7"]);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new(8);
        for text in ["a", "b", "c"] {
            log.push_text(text);
        }
        assert_eq!(texts(log.recent(2)), vec!["c", "b"]);
    }

    #[test]
    fn lines_filter_by_round() {
        let mut log = MessageLog::new(8);
        log.push_text("welcome");
        log.push(MessageEntry::new("Rolled 1 1 1", Some(1), MessageLevel::Info));
        log.push(MessageEntry::new("Rolled 2 2 2", Some(2), MessageLevel::Info));
        log.push(MessageEntry::new("Lost a life", Some(2), MessageLevel::Warning));
        assert_eq!(texts(log.for_round(2)), vec!["Rolled 2 2 2", "Lost a life"]);
        assert_eq!(log.for_round(3).count(), 0);
    }

    #[test]
    fn zero_capacity_still_keeps_one_line() {
        let mut log = MessageLog::new(0);
        assert_eq!(log.capacity(), 1);
        log.push_text("kept");
        log.push_text("replaced");
        assert_eq!(texts(log.iter()), vec!["replaced"]);
    }
}
