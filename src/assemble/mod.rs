//! Orchestration: read base, fold in overrides, filter env output

use crate::filter::{filter_env, Environment};
use crate::merge::Format;
use crate::source::{ReadError, SourceReader};
use anyhow::{Context, Result};
use tracing::{info, warn};

pub struct Options {
    pub format: Format,
    pub require_all_paths: bool,
    pub override_env: bool,
}

/// Assemble the final document from an ordered list of paths.
///
/// The first path is the base and must be readable. Each remaining path is
/// an override, applied left to right. An unreadable override is fatal only
/// when `require_all_paths` is set; a combine failure never is — the
/// accumulated document is left untouched and the run moves on. When the
/// format is env, the merged result is filtered against the environment
/// before being returned.
pub fn assemble(
    reader: &dyn SourceReader,
    paths: &[String],
    options: &Options,
    env: &dyn Environment,
) -> Result<String> {
    let (base, overrides) = paths.split_first().context("at least one path is required")?;

    let mut data = reader
        .read(base)
        .with_context(|| format!("failed to read base path {base}"))?;
    info!("pulling from: {base}");

    for path in overrides {
        match reader.read(path) {
            Ok(override_doc) => {
                info!("overriding with: {path}");
                match options.format.combine(&data, &override_doc) {
                    Ok(combined) => data = combined,
                    Err(err) => warn!("error combining documents from {path}: {err:#}"),
                }
            }
            Err(err) if options.require_all_paths => {
                return Err(err).with_context(|| format!("failed to read required path {path}"));
            }
            Err(ReadError::NotFound(_)) => warn!("ignoring path not found: {path}"),
            Err(err) => warn!("ignoring unreadable path: {err}"),
        }
    }

    if options.format == Format::Env {
        data = filter_env(&data, options.override_env, env);
    }

    Ok(data)
}
