//! Parser for delimiter-separated line-table text

use crate::error::{Error, Result};
use crate::table::{Line, LineTable};
use std::fs;
use std::path::Path;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Parse text into a [`LineTable`] using the given delimiter
///
/// Each input line keeps its original text and 1-based number. Non-blank
/// lines are split on the delimiter with every segment trimmed; blank
/// lines get no fields.
pub fn parse_str(text: &str, delimiter: char) -> LineTable {
    let lines = text
        .lines()
        .enumerate()
        .map(|(i, raw)| Line::new(i + 1, raw.to_string(), split_fields(raw, delimiter)))
        .collect();

    LineTable { delimiter, lines }
}

/// Parse optional text; absent text yields an empty table
pub fn parse_opt(text: Option<&str>, delimiter: char) -> LineTable {
    match text {
        Some(text) => parse_str(text, delimiter),
        None => LineTable::new(delimiter),
    }
}

/// Read a file and parse its contents into a [`LineTable`]
pub fn parse_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<LineTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_str(&text, delimiter))
}

/// Split a line into trimmed fields; a blank line has none
fn split_fields(raw: &str, delimiter: char) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(delimiter).map(|s| s.trim().to_string()).collect()
}
