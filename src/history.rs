//! Session history of generated passwords.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    /// 1-based position at the time it was appended.
    pub index: usize,
    pub password: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.password)
    }
}

/// Generated passwords in the order they were produced. Never persisted.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, password: &str) -> &Entry {
        let index = self.entries.len() + 1;
        self.entries.push(Entry {
            index,
            password: password.to_string(),
        });
        &self.entries[index - 1]
    }

    /// Drop every entry. Numbering restarts at 1.
    pub fn clear(&mut self) {
        self.entries.zeroize();
        self.entries.clear();
    }

    /// Look up an entry by its 1-based display index.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display lines, `"<n>. <password>"`.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(Entry::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_numbered_in_append_order() {
        let mut history = History::new();
        history.append("p1");
        history.append("p2");
        let last = history.append("p3").to_string();

        assert_eq!(last, "3. p3");
        assert_eq!(history.lines(), vec!["1. p1", "2. p2", "3. p3"]);
    }

    #[test]
    fn numbering_restarts_after_clear() {
        let mut history = History::new();
        history.append("p1");
        history.append("p2");
        history.clear();
        assert!(history.is_empty());

        history.append("p4");
        assert_eq!(history.lines(), vec!["1. p4"]);
    }

    #[test]
    fn get_uses_display_index() {
        let mut history = History::new();
        history.append("first");
        history.append("second");

        assert_eq!(history.get(0), None);
        assert_eq!(history.get(2).map(|e| e.password.as_str()), Some("second"));
        assert_eq!(history.get(3), None);
    }
}
