//! Stage errors for a comparison run.
//!
//! Every variant is fatal. The message names the stage that failed so the
//! single diagnostic printed by `main` is enough to locate the problem.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Error loading settings file {path:?}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("Unknown encoding '{0}'")]
    UnknownEncoding(String),
    #[error("Unable to open input file {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to read CSV file {path:?}: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Unable to decode row {row} of {path:?} as {encoding}")]
    DecodeInput {
        path: PathBuf,
        row: usize,
        encoding: &'static str,
    },
    #[error("Unable to read CSV file {path:?}: quoted field is never closed")]
    UnterminatedQuote { path: PathBuf },
    #[error("Invalid database port '{0}'")]
    InvalidPort(String),
    #[error("Unable to connect to the database: {0}")]
    Connect(#[source] mysql::Error),
    #[error("Unable to query database: {0}")]
    Query(#[source] mysql::Error),
    #[error("Error scanning row {row}: {message}")]
    Scan { row: usize, message: String },
    #[error("Unable to create output file {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to encode row {row} for {path:?} as {encoding}")]
    EncodeOutput {
        path: PathBuf,
        row: usize,
        encoding: &'static str,
    },
    #[error("Unable to write output file {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type MatchResult<T> = Result<T, MatchError>;
