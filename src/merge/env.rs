//! env-format merge: ordered `key=value` lines

use crate::merge::lines::{is_blank, parse_line, OrderedMap};
use tracing::warn;

/// Merge two env documents, base lines first, override lines after.
///
/// A repeated key keeps the position of its first occurrence and takes the
/// value of its last occurrence, so override values win without reordering
/// the file. Blank lines are dropped. Lines without `=` are logged and
/// skipped, never fatal.
///
/// Comment lines are NOT stripped here: `# note` has no `=` and falls out
/// as a parse warning, but `#note=x` parses as key `#note` and survives the
/// merge. The filter step is the one that treats `#`-prefixed keys as
/// comments; see DESIGN.md for why the mismatch is kept.
pub fn combine_env(base: &str, override_doc: &str) -> String {
    let mut entries = OrderedMap::new();

    for line in base.lines().chain(override_doc.lines()) {
        if is_blank(line) {
            continue;
        }
        match parse_line(line) {
            Some((key, value)) => entries.insert(key, value),
            None => warn!("unable to parse line (no equals exists on line): {line}"),
        }
    }

    entries.render()
}
