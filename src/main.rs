//! config-keeper: Assemble a config file from layered documents
//!
//! This tool reads a base configuration document plus any number of
//! override documents from ZooKeeper paths or local files, merges them in
//! priority order, and writes the result to a destination file.

use anyhow::Result;

mod assemble;
mod cli;
mod filter;
mod merge;
mod output;
mod source;

fn main() -> Result<()> {
    cli::run()
}
