//! Command-line interface for config-keeper
//!
//! Flat flag surface: a required destination, optional ZooKeeper servers,
//! a document type, and one or more positional paths (base first).

use crate::assemble::{self, Options};
use crate::filter::ProcessEnvironment;
use crate::merge::Format;
use crate::output;
use crate::source::{FileSource, SourceReader, ZkSource};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Assemble a config file from layered ZooKeeper or local documents
#[derive(Parser)]
#[command(name = "config-keeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File destination for the assembled config
    #[arg(long)]
    dest: PathBuf,

    /// ZooKeeper servers, comma delimited; paths are local files when unset
    #[arg(long)]
    zk: Option<String>,

    /// Type of file to assemble
    #[arg(long = "type", value_enum, default_value = "env")]
    file_type: Format,

    /// Fail when any path cannot be read, not just the base
    #[arg(long = "requireall")]
    require_all_paths: bool,

    /// Keep env entries even when the variable is already set
    #[arg(long = "override")]
    override_env: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,

    /// Paths to read; the first is the base, later paths override earlier ones
    #[arg(required = true)]
    paths: Vec<String>,
}

pub fn run() -> Result<()> {
    // Usage and parse failures exit with code 1; --help and --version
    // still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls
    // back to DEBUG, otherwise the tool narrates at INFO.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let reader: Box<dyn SourceReader> = match &cli.zk {
        Some(servers) => Box::new(ZkSource::connect(servers)?),
        None => Box::new(FileSource),
    };

    let options = Options {
        format: cli.file_type,
        require_all_paths: cli.require_all_paths,
        override_env: cli.override_env,
    };
    let data = assemble::assemble(reader.as_ref(), &cli.paths, &options, &ProcessEnvironment)?;
    output::write_destination(&cli.dest, &data)?;
    Ok(())
}
