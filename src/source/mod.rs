//! Document sources: local files and the remote ZooKeeper store

pub mod file;
pub mod zookeeper;

use thiserror::Error;

pub use file::FileSource;
pub use zookeeper::ZkSource;

/// Why a path read failed.
///
/// The orchestrator only branches on whether a read succeeded, but the
/// variants keep log lines honest about what actually went wrong.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("path not found: {0}")]
    NotFound(String),
    #[error("connection error reading {path}: {reason}")]
    Connection { path: String, reason: String },
    #[error("failed to read {path}: {reason}")]
    Other { path: String, reason: String },
}

/// Read raw document text for a path.
///
/// Backed by either the local filesystem or a ZooKeeper connection; the
/// orchestrator does not care which.
pub trait SourceReader {
    fn read(&self, path: &str) -> Result<String, ReadError>;
}
