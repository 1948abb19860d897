//! YAML merge: shallow top-level key replacement

use anyhow::{Context, Result};
use serde_yaml::Mapping;

/// Merge two YAML documents by replacing top-level keys.
///
/// Same contract as the JSON strategy: both documents must be top-level
/// mappings, and override values replace base values wholesale.
pub fn combine_yaml(base: &str, override_doc: &str) -> Result<String> {
    let mut data: Mapping =
        serde_yaml::from_str(base).context("base document is not a YAML mapping")?;
    let overrides: Mapping =
        serde_yaml::from_str(override_doc).context("override document is not a YAML mapping")?;

    for (key, value) in overrides {
        data.insert(key, value);
    }

    serde_yaml::to_string(&data).context("failed to serialize merged YAML")
}

#[cfg(test)]
mod tests {
    use super::combine_yaml;
    use serde_yaml::Value;

    fn parse(s: &str) -> Value {
        serde_yaml::from_str(s).expect("valid yaml")
    }

    #[test]
    fn override_keys_replace_base_keys() {
        let merged = combine_yaml("a: 1\nb: 2\n", "b: 3\nc: 4\n").expect("merge");
        assert_eq!(parse(&merged), parse("a: 1\nb: 3\nc: 4\n"));
    }

    #[test]
    fn nested_mappings_are_replaced_not_merged() {
        let merged = combine_yaml("a: 1\nb:\n  x: 1\n", "b: 2\n").expect("merge");
        assert_eq!(parse(&merged), parse("a: 1\nb: 2\n"));
    }

    #[test]
    fn sequences_and_scalars_survive_from_base() {
        let merged = combine_yaml("list:\n  - 1\n  - 2\nname: keep\n", "name: new\n")
            .expect("merge");
        let value = parse(&merged);
        assert_eq!(value["list"], parse("[1, 2]"));
        assert_eq!(value["name"], parse("new"));
    }

    #[test]
    fn non_mapping_documents_are_rejected() {
        assert!(combine_yaml("- a\n- b\n", "a: 1\n").is_err());
        assert!(combine_yaml("a: 1\n", "just a scalar").is_err());
    }
}
