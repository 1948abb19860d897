//! Destination file writing

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the assembled document, creating missing parent directories.
///
/// Returns the absolute path actually written.
pub fn write_destination(destination: &Path, data: &str) -> Result<PathBuf> {
    let full = std::path::absolute(destination)
        .with_context(|| format!("failed to resolve destination {}", destination.display()))?;

    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    info!("saving to {}", full.display());
    fs::write(&full, data)
        .with_context(|| format!("failed to write destination {}", full.display()))?;
    Ok(full)
}

#[cfg(test)]
mod tests {
    use super::write_destination;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_content_to_the_destination() {
        let tmp = TempDir::new().expect("tmp");
        let dest = tmp.path().join("final.env");

        let written = write_destination(&dest, "a=1\n").expect("write");
        assert_eq!(fs::read_to_string(written).expect("read back"), "a=1\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let tmp = TempDir::new().expect("tmp");
        let dest = tmp.path().join("deeply").join("nested").join("final.env");

        write_destination(&dest, "a=1\n").expect("write");
        assert_eq!(fs::read_to_string(&dest).expect("read back"), "a=1\n");
    }
}
