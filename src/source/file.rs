//! Local filesystem source

use crate::source::{ReadError, SourceReader};
use std::fs;
use std::io::ErrorKind;

/// Reads documents from local files, resolving paths to absolute first.
pub struct FileSource;

impl SourceReader for FileSource {
    fn read(&self, path: &str) -> Result<String, ReadError> {
        let absolute = std::path::absolute(path).map_err(|err| ReadError::Other {
            path: path.to_string(),
            reason: err.to_string(),
        })?;

        match fs::read(&absolute) {
            // Content is an opaque byte blob to this tool; decode lossily
            // rather than failing on stray non-UTF-8 bytes.
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ReadError::NotFound(path.to_string()))
            }
            Err(err) => Err(ReadError::Other {
                path: path.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}
