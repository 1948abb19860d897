//! Line parsing helpers and the insertion-ordered entry map

use std::collections::HashMap;
use std::fmt::Write as _;

/// True for lines that are empty after trimming whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse a `key=value` line on the first `=`.
///
/// The key is trimmed; the value keeps its whitespace verbatim. Returns
/// `None` when the line has no `=` at all.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim().to_string(), value.to_string()))
}

/// Map of env entries that preserves first-seen key order.
///
/// A key's position is fixed the first time it is inserted; later inserts
/// overwrite only the value. Keys are kept in an explicit list rather than
/// relying on hash map iteration order.
#[derive(Debug, Default)]
pub struct OrderedMap {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        if !self.values.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.values.insert(key, value);
    }

    /// Render every entry as `key=value\n`, in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for key in &self.keys {
            let _ = writeln!(out, "{}={}", key, self.values[key]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_include_pure_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank("a=1"));
        assert!(!is_blank("# comment"));
    }

    #[test]
    fn parse_line_splits_on_first_equals() {
        let (key, value) = parse_line("url=http://host?a=b").expect("parse");
        assert_eq!(key, "url");
        assert_eq!(value, "http://host?a=b");
    }

    #[test]
    fn parse_line_trims_key_but_not_value() {
        let (key, value) = parse_line("  spaced  = padded value ").expect("parse");
        assert_eq!(key, "spaced");
        assert_eq!(value, " padded value ");
    }

    #[test]
    fn parse_line_rejects_lines_without_equals() {
        assert!(parse_line("no equals here").is_none());
        assert!(parse_line("# just a comment").is_none());
    }

    #[test]
    fn ordered_map_keeps_first_position_and_last_value() {
        let mut map = OrderedMap::new();
        map.insert("a".into(), "1".into());
        map.insert("b".into(), "2".into());
        map.insert("a".into(), "3".into());
        assert_eq!(map.render(), "a=3\nb=2\n");
    }
}
