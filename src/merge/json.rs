//! JSON merge: shallow top-level key replacement

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// Merge two JSON documents by replacing top-level keys.
///
/// Both documents must be JSON objects. Every key in the override replaces
/// the base key's entire value; nested objects are not merged recursively.
/// Output is pretty-printed with 4-space indentation.
pub fn combine_json(base: &str, override_doc: &str) -> Result<String> {
    let mut data: Map<String, Value> =
        serde_json::from_str(base).context("base document is not a JSON object")?;
    let overrides: Map<String, Value> =
        serde_json::from_str(override_doc).context("override document is not a JSON object")?;

    for (key, value) in overrides {
        data.insert(key, value);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer).context("failed to serialize merged JSON")?;
    String::from_utf8(buf).context("merged JSON is not valid UTF-8")
}
