pub mod annotate;
pub mod cli;
pub mod compare;
pub mod config;
pub mod db;
pub mod error;
pub mod io_utils;
pub mod lookup;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug};

use crate::cli::Cli;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("sku_matcher", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    debug!(
        "Comparing {:?} -> {:?} with delimiter '{}'",
        cli.compare.input,
        cli.compare.output,
        printable_delimiter(cli.compare.delimiter)
    );
    compare::execute(&cli.compare)?;
    println!(
        "Comparison complete. Output written to '{}'",
        cli.compare.output.display()
    );
    Ok(())
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
