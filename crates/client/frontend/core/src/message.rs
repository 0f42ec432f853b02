//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// How many identical messages arrived back to back.
    pub count: u32,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            count: 1,
            level,
        }
    }

    /// Text with the repeat counter appended when the entry is stacked.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Ordered, bounded log of messages displayed to the player.
///
/// When full, the oldest entry is dropped. A message identical to the last
/// one (same text and level) stacks onto it instead of taking a new slot.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if let Some(last) = self.entries.back_mut()
            && last.text == entry.text
            && last.level == entry.level
        {
            last.count += entry.count;
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Warning));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Error));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MessageEntry> {
        self.entries.get(index)
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    /// Newest first, at most `limit` entries.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    /// Entries at or before `cursor`, oldest to newest.
    pub fn up_to(&self, cursor: usize) -> impl DoubleEndedIterator<Item = &MessageEntry> {
        self.entries.iter().take(cursor.saturating_add(1))
    }
}
