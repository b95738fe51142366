//! Appends the match indicator column.
//!
//! Row 0 is the header and gets [`MATCH_COLUMN_LABEL`]. Every other row gets
//! its trimmed first field when that value is a known SKU, otherwise an empty
//! string. No other field is touched and no row is dropped or reordered.

use crate::lookup::SkuSet;

pub const MATCH_COLUMN_LABEL: &str = "RES SKU";

/// Returns the value to append for one data row.
pub fn match_indicator(row: &[String], skus: &SkuSet) -> String {
    let candidate = row.first().map(|field| field.trim()).unwrap_or_default();
    if skus.contains(candidate) {
        candidate.to_string()
    } else {
        String::new()
    }
}

/// Annotates `rows` in place and returns how many data rows matched.
pub fn annotate_rows(rows: &mut [Vec<String>], skus: &SkuSet) -> usize {
    let mut matched = 0usize;
    for (idx, row) in rows.iter_mut().enumerate() {
        if idx == 0 {
            row.push(MATCH_COLUMN_LABEL.to_string());
            continue;
        }
        let indicator = match_indicator(row, skus);
        if !indicator.is_empty() {
            matched += 1;
        }
        row.push(indicator);
    }
    matched
}
