//! Format-specific document combination (env, JSON, YAML)

pub mod env;
pub mod json;
pub mod lines;
pub mod yaml;

use anyhow::Result;
use clap::ValueEnum;

/// Declared format of the documents being assembled.
///
/// Doubles as the clap value enum for `--type`, so the flag accepts exactly
/// `env`, `json`, or `yaml`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Env,
    Json,
    Yaml,
}

impl Format {
    /// Combine a base document with one override document.
    ///
    /// The env strategy never fails: unparseable lines are logged and
    /// dropped. JSON and YAML fail when either document is not a top-level
    /// mapping, and the caller decides whether that aborts the run.
    pub fn combine(self, base: &str, override_doc: &str) -> Result<String> {
        match self {
            Format::Env => Ok(env::combine_env(base, override_doc)),
            Format::Json => json::combine_json(base, override_doc),
            Format::Yaml => yaml::combine_yaml(base, override_doc),
        }
    }
}
