//! ZooKeeper source
//!
//! One connection is opened up front with a fixed 5-second timeout and
//! reused sequentially for every path read; it closes when the process
//! exits.

use crate::source::{ReadError, SourceReader};
use anyhow::{anyhow, Result};
use std::time::Duration;
use tracing::debug;
use zookeeper::{WatchedEvent, Watcher, ZkError, ZooKeeper};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

struct LoggingWatcher;

impl Watcher for LoggingWatcher {
    fn handle(&self, event: WatchedEvent) {
        debug!("zookeeper event: {event:?}");
    }
}

/// Reads documents from znodes over a single ZooKeeper connection.
pub struct ZkSource {
    conn: ZooKeeper,
}

impl ZkSource {
    /// Connect to a comma-delimited server list, e.g. `host1:2181,host2:2181`.
    pub fn connect(servers: &str) -> Result<Self> {
        let conn = ZooKeeper::connect(servers, CONNECT_TIMEOUT, LoggingWatcher)
            .map_err(|err| anyhow!("failed to connect to zookeeper at {servers}: {err:?}"))?;
        Ok(Self { conn })
    }
}

impl SourceReader for ZkSource {
    fn read(&self, path: &str) -> Result<String, ReadError> {
        match self.conn.get_data(path, false) {
            Ok((bytes, _stat)) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(ZkError::NoNode) => Err(ReadError::NotFound(path.to_string())),
            Err(
                err @ (ZkError::ConnectionLoss
                | ZkError::OperationTimeout
                | ZkError::SessionExpired),
            ) => Err(ReadError::Connection {
                path: path.to_string(),
                reason: format!("{err:?}"),
            }),
            Err(err) => Err(ReadError::Other {
                path: path.to_string(),
                reason: format!("{err:?}"),
            }),
        }
    }
}
