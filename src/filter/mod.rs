//! env-format filtering against the process environment

use crate::merge::lines::{is_blank, parse_line, OrderedMap};
use tracing::{info, warn};

/// Lookup capability over the process environment.
///
/// Injected into `filter_env` so the filtering logic is testable without
/// mutating the real environment.
pub trait Environment {
    fn contains(&self, key: &str) -> bool;
}

/// The real process environment.
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn contains(&self, key: &str) -> bool {
        // var_os panics on keys it cannot represent; such keys can only
        // come from malformed documents and are never set anyway.
        if key.is_empty() || key.contains('\0') {
            return false;
        }
        std::env::var_os(key).is_some()
    }
}

/// Drop env entries already present in the environment.
///
/// Lines whose parsed key starts with `#` are treated as comments and
/// dropped. Remaining entries are kept when `override_env` is true or the
/// key is absent from the environment; otherwise they are skipped with an
/// info log. Output preserves first-seen order, and a duplicated surviving
/// key takes the later value. Each occurrence is checked against the
/// environment independently.
pub fn filter_env(input: &str, override_env: bool, env: &dyn Environment) -> String {
    let mut entries = OrderedMap::new();

    for line in input.lines() {
        if is_blank(line) {
            continue;
        }
        match parse_line(line) {
            Some((key, value)) => {
                if key.starts_with('#') {
                    continue;
                }
                if override_env || !env.contains(&key) {
                    entries.insert(key, value);
                } else {
                    info!("skipping key {key}: exists in system environment vars");
                }
            }
            None => warn!("unable to parse line (no equals exists on line): {line}"),
        }
    }

    entries.render()
}
