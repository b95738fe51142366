//! CSV reading and writing for the comparison run.
//!
//! - **Reading**: the whole input is materialized as `Vec<Vec<String>>`. The
//!   header is read as an ordinary row so it can be annotated like the rest.
//!   A quoted field left open at end of input is rejected.
//! - **Encoding**: fields are decoded from, and encoded to, any `encoding_rs`
//!   label; UTF-8 is the default both ways.
//! - **Writing**: records are written through a buffered file writer with
//!   quoting only where a field needs it, then flushed.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use csv::ByteRecord;
use encoding_rs::{Encoding, UTF_8};

use crate::error::{MatchError, MatchResult};

pub const DEFAULT_CSV_DELIMITER: u8 = b',';

pub fn resolve_encoding(label: Option<&str>) -> MatchResult<&'static Encoding> {
    match label {
        Some(value) => Encoding::for_label(value.trim().as_bytes())
            .ok_or_else(|| MatchError::UnknownEncoding(value.to_string())),
        None => Ok(UTF_8),
    }
}

/// Counts `"` bytes as they stream past.
///
/// Opening, closing and doubled quotes all come in pairs, so an odd total at
/// end of input means a quoted field was never closed.
pub struct QuoteTally<R> {
    inner: R,
    quotes: u64,
}

impl<R: Read> QuoteTally<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, quotes: 0 }
    }

    pub fn is_balanced(&self) -> bool {
        self.quotes % 2 == 0
    }
}

impl<R: Read> Read for QuoteTally<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.quotes += buf[..read].iter().filter(|&&b| b == b'"').count() as u64;
        Ok(read)
    }
}

pub fn open_csv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<QuoteTally<R>>
where
    R: Read,
{
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(false)
        .from_reader(QuoteTally::new(reader))
}

pub fn open_csv_writer<W>(writer: W, delimiter: u8) -> csv::Writer<W>
where
    W: Write,
{
    csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer)
}

/// Loads every row of `path` into memory, header included.
pub fn read_rows(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
) -> MatchResult<Vec<Vec<String>>> {
    let file = File::open(path).map_err(|source| MatchError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(BufReader::new(file), path, delimiter, encoding)
}

pub fn read_rows_from<R>(
    reader: R,
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
) -> MatchResult<Vec<Vec<String>>>
where
    R: Read,
{
    let mut reader = open_csv_reader(reader, delimiter);
    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    loop {
        let more = reader
            .read_byte_record(&mut record)
            .map_err(|source| MatchError::ParseInput {
                path: path.to_path_buf(),
                source,
            })?;
        if !more {
            break;
        }
        let decoded =
            decode_record(&record, encoding).ok_or_else(|| MatchError::DecodeInput {
                path: path.to_path_buf(),
                row: rows.len() + 1,
                encoding: encoding.name(),
            })?;
        rows.push(decoded);
    }
    if !reader.get_ref().is_balanced() {
        return Err(MatchError::UnterminatedQuote {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}

pub fn decode_record(record: &ByteRecord, encoding: &'static Encoding) -> Option<Vec<String>> {
    record
        .iter()
        .map(|field| {
            let (text, had_errors) = encoding.decode_without_bom_handling(field);
            (!had_errors).then(|| text.into_owned())
        })
        .collect()
}

/// Encodes one row; `None` when a field has characters `encoding` cannot
/// represent.
pub fn encode_record(fields: &[String], encoding: &'static Encoding) -> Option<ByteRecord> {
    let mut record = ByteRecord::with_capacity(0, fields.len());
    for field in fields {
        if encoding == UTF_8 {
            record.push_field(field.as_bytes());
            continue;
        }
        let (bytes, _, had_errors) = encoding.encode(field);
        if had_errors {
            return None;
        }
        record.push_field(&bytes);
    }
    Some(record)
}

pub fn encode_rows(
    rows: &[Vec<String>],
    path: &Path,
    encoding: &'static Encoding,
) -> MatchResult<Vec<ByteRecord>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            encode_record(row, encoding).ok_or_else(|| MatchError::EncodeOutput {
                path: path.to_path_buf(),
                row: idx + 1,
                encoding: encoding.name(),
            })
        })
        .collect()
}

/// Encodes `rows`, then creates `path` and writes them in order.
///
/// Encoding happens first so a row that cannot be represented leaves no file
/// behind.
pub fn write_rows(
    path: &Path,
    rows: &[Vec<String>],
    delimiter: u8,
    encoding: &'static Encoding,
) -> MatchResult<()> {
    let records = encode_rows(rows, path, encoding)?;
    let file = File::create(path).map_err(|source| MatchError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_records_to(BufWriter::new(file), path, &records, delimiter)
}

pub fn write_records_to<W>(
    writer: W,
    path: &Path,
    records: &[ByteRecord],
    delimiter: u8,
) -> MatchResult<()>
where
    W: Write,
{
    let write_error = |source: csv::Error| MatchError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = open_csv_writer(writer, delimiter);
    for record in records {
        writer.write_byte_record(record).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|err| write_error(csv::Error::from(err)))?;
    Ok(())
}
