// history.rs

/// Append-only record of formatted operations, e.g. `"2 + 2 = 4"`.
pub trait HistoryLog {
    fn add_entry(&mut self, entry: &str);

    /// The last `count` entries, oldest first. Asking for more than is
    /// stored returns everything.
    fn last_operations(&self, count: usize) -> Vec<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryHistory {
    entries: Vec<String>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn get(&self, n: usize) -> Option<&String> {
        self.entries.get(n)
    }
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }
}

impl HistoryLog for InMemoryHistory {
    fn add_entry(&mut self, entry: &str) {
        self.entries.push(entry.to_string());
    }

    fn last_operations(&self, count: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(count);
        self.entries[start..].to_vec()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(entries: &[&str]) -> InMemoryHistory {
        let mut history = InMemoryHistory::new();
        for e in entries {
            history.add_entry(e);
        }
        history
    }

    #[test]
    fn keeps_insertion_order() {
        let history = filled(&["1 + 1 = 2", "2 * 2 = 4", "9 / 3 = 3"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).map(String::as_str), Some("1 + 1 = 2"));
        assert_eq!(history.get(2).map(String::as_str), Some("9 / 3 = 3"));
        assert_eq!(history.get(3), None);
    }

    #[test]
    fn last_operations_returns_tail_oldest_first() {
        let history = filled(&["a", "b", "c", "d"]);
        assert_eq!(history.last_operations(2), vec!["c", "d"]);
        assert_eq!(history.last_operations(1), vec!["d"]);
    }

    #[test]
    fn last_operations_clamps_to_size() {
        let history = filled(&["a", "b"]);
        assert_eq!(history.last_operations(10), vec!["a", "b"]);
    }

    #[test]
    fn zero_count_and_empty_log_return_nothing() {
        let history = filled(&["a"]);
        assert!(history.last_operations(0).is_empty());
        let empty = InMemoryHistory::new();
        assert!(empty.is_empty());
        assert!(empty.last_operations(5).is_empty());
    }

    #[test]
    fn entries_are_not_validated() {
        let history = filled(&["", "not an operation"]);
        assert_eq!(history.last_operations(2), vec!["", "not an operation"]);
    }
}
