use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Mark which SKUs in a CSV file exist in the store database",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub compare: CompareArgs,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Input CSV file whose first column holds the SKU
    #[arg(short = 'i', long = "input", default_value = "sku.csv")]
    pub input: PathBuf,
    /// Output CSV file with the appended match column
    #[arg(short = 'o', long = "output", default_value = "matched.csv")]
    pub output: PathBuf,
    /// Settings file with DB_* variables (an optional .env is read when omitted)
    #[arg(long = "env-file")]
    pub env_file: Option<PathBuf>,
    /// CSV delimiter character for input and output (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter, default_value = ",")]
    pub delimiter: u8,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Character encoding for the output file (defaults to utf-8)
    #[arg(long = "output-encoding")]
    pub output_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
