#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sku_matcher::{
    db::SkuSource,
    error::{MatchError, MatchResult},
};
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        self.write_bytes(name, contents.as_bytes())
    }

    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents).expect("write temp file contents");
        path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Parses a CSV file without header handling so the header row is included.
pub fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let contents = fs::read_to_string(path).expect("read csv output");
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(contents.as_bytes())
        .records()
        .map(|record| {
            record
                .expect("parse output record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

pub fn skus(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Yields a few SKUs and then fails as a broken result set would.
pub struct FailingSource {
    pub before_failure: Vec<String>,
}

impl SkuSource for FailingSource {
    fn scan_skus(&mut self, visit: &mut dyn FnMut(String)) -> MatchResult<()> {
        for sku in self.before_failure.drain(..) {
            visit(sku);
        }
        Err(MatchError::Scan {
            row: 3,
            message: "NULL value in column 'sku'".to_string(),
        })
    }
}
