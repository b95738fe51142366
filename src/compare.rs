//! The comparison pipeline: read input, query SKUs, annotate, write output.

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::info;

use crate::{
    annotate,
    cli::CompareArgs,
    config::{self, ConnectionParams},
    db::{MySqlSkuSource, SkuSource},
    error::MatchResult,
    io_utils,
    lookup::SkuSet,
};

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
    pub input_encoding: &'static Encoding,
    pub output_encoding: &'static Encoding,
}

impl CompareOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            delimiter: io_utils::DEFAULT_CSV_DELIMITER,
            input_encoding: encoding_rs::UTF_8,
            output_encoding: encoding_rs::UTF_8,
        }
    }

    pub fn from_args(args: &CompareArgs) -> MatchResult<Self> {
        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            delimiter: args.delimiter,
            input_encoding: io_utils::resolve_encoding(args.input_encoding.as_deref())?,
            output_encoding: io_utils::resolve_encoding(args.output_encoding.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub data_rows: usize,
    pub matched_rows: usize,
    pub known_skus: usize,
}

/// Entry point for the command line: settings, then the full pipeline
/// against MySQL.
pub fn execute(args: &CompareArgs) -> MatchResult<Summary> {
    let options = CompareOptions::from_args(args)?;
    match &args.env_file {
        Some(path) => config::load_settings(path, true)?,
        None => config::load_settings(Path::new(config::DEFAULT_SETTINGS_FILE), false)?,
    }
    let params = ConnectionParams::from_env();
    run_comparison(&options, || MySqlSkuSource::connect(&params))
}

/// Runs the pipeline with a source opened by `connect`.
///
/// The input is read before `connect` is called and the output file is only
/// created once the SKU set is complete, so a failure in any earlier stage
/// leaves no output behind.
pub fn run_comparison<S, F>(options: &CompareOptions, connect: F) -> MatchResult<Summary>
where
    S: SkuSource,
    F: FnOnce() -> MatchResult<S>,
{
    let mut rows = io_utils::read_rows(&options.input, options.delimiter, options.input_encoding)?;
    info!("Read {} row(s) from {:?}", rows.len(), options.input);

    let mut source = connect()?;
    let skus = SkuSet::from_source(&mut source)?;
    drop(source);
    info!("Loaded {} distinct SKU(s) from the database", skus.len());

    let matched_rows = annotate::annotate_rows(&mut rows, &skus);
    io_utils::write_rows(
        &options.output,
        &rows,
        options.delimiter,
        options.output_encoding,
    )?;

    let summary = Summary {
        data_rows: rows.len().saturating_sub(1),
        matched_rows,
        known_skus: skus.len(),
    };
    info!(
        "Matched {} of {} data row(s) -> {:?}",
        summary.matched_rows, summary.data_rows, options.output
    );
    Ok(summary)
}
