use std::collections::VecDeque;

/// Maximum number of calculations kept
pub const HISTORY_CAPACITY: usize = 10;

/// Completed calculation summaries, newest first.
///
/// Pushing beyond [`HISTORY_CAPACITY`] silently drops the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_front(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for History {
    /// Builds a history from entries given newest first
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut entries: VecDeque<String> = iter.into_iter().map(Into::into).collect();
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut history = History::new();
        history.push_front("1 + 1 = 2");
        history.push_front("2 * 3 = 6");

        assert_eq!(history.entries(), vec!["2 * 3 = 6", "1 + 1 = 2"]);
        assert_eq!(history.latest(), Some("2 * 3 = 6"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::new();
        for i in 0..12 {
            history.push_front(format!("entry {i}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.latest(), Some("entry 11"));
        assert_eq!(history.iter().last(), Some("entry 2"));
    }

    #[test]
    fn test_clear() {
        let mut history: History = ["a", "b"].into_iter().collect();
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_from_iter_truncates() {
        let history: History = (0..20).map(|i| i.to_string()).collect();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.latest(), Some("0"));
    }
}
