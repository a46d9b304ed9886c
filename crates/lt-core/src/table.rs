//! Core types for representing parsed line tables

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single input line, split into trimmed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// 1-based position of the line in the input
    pub number: usize,
    /// Original text of the line
    pub raw: String,
    /// Trimmed delimiter-split segments, empty for a blank line
    pub fields: Vec<String>,
}

impl Line {
    /// Create a new line
    pub fn new(number: usize, raw: String, fields: Vec<String>) -> Self {
        Self {
            number,
            raw,
            fields,
        }
    }

    /// The lookup label: the first field, if the line has any
    pub fn label(&self) -> Option<&str> {
        self.fields.first().map(|f| f.as_str())
    }

    /// Get a field by 0-based index
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.as_str())
    }

    /// Whether the original line is blank or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// An ordered table of parsed lines, addressed by leading-field label
///
/// Built once from input text and never mutated afterward; every lookup
/// is a pure read over the line list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineTable {
    /// Delimiter the input was split on
    pub delimiter: char,
    /// Parsed lines in input order
    pub lines: Vec<Line>,
}

impl LineTable {
    /// Create a new empty table
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            lines: Vec::new(),
        }
    }

    /// Get the number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the table holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the first line whose original text is not blank
    pub fn first_non_blank_line(&self) -> Option<&Line> {
        self.lines.iter().find(|l| !l.is_blank())
    }

    /// Find the first line whose label matches, ignoring case
    ///
    /// Blank lines have no label and never match. A blank lookup label
    /// is rejected with [`Error::BlankLabel`].
    pub fn line_by_label(&self, label: &str) -> Result<Option<&Line>> {
        if label.trim().is_empty() {
            return Err(Error::BlankLabel);
        }

        Ok(self
            .lines
            .iter()
            .find(|l| l.label().is_some_and(|first| first.eq_ignore_ascii_case(label))))
    }

    /// Find the first line satisfying a predicate
    pub fn line_by_filter<F>(&self, filter: F) -> Option<&Line>
    where
        F: Fn(&Line) -> bool,
    {
        self.lines.iter().find(|l| filter(l))
    }

    /// Find all lines satisfying a predicate, in input order
    pub fn all_lines_by_filter<F>(&self, filter: F) -> Vec<&Line>
    where
        F: Fn(&Line) -> bool,
    {
        self.lines.iter().filter(|l| filter(l)).collect()
    }

    /// Number of the last line, or 0 for an empty table
    pub fn last_line_number(&self) -> usize {
        self.lines.last().map(|l| l.number).unwrap_or(0)
    }

    /// Read the value of a labeled line as a string
    ///
    /// The value is the line's remaining non-blank fields joined with the
    /// delimiter. Fails if the label is absent, the line has no value
    /// field, or the joined value is blank.
    pub fn required_string(&self, label: &str) -> Result<String> {
        let line = self.required_value_line(label)?;

        let delimiter = self.delimiter.to_string();
        let joined = line.fields[1..]
            .iter()
            .filter(|f| !f.trim().is_empty())
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(&delimiter);

        if joined.trim().is_empty() {
            return Err(Error::EmptyValue {
                label: label.to_string(),
            });
        }

        Ok(joined)
    }

    /// Read the second field of a labeled line as an integer
    pub fn required_int(&self, label: &str) -> Result<i64> {
        let line = self.required_value_line(label)?;
        Ok(line.fields[1].parse()?)
    }

    /// Read the second field of a labeled line as a floating-point number
    pub fn required_double(&self, label: &str) -> Result<f64> {
        let line = self.required_value_line(label)?;
        Ok(line.fields[1].parse()?)
    }

    /// Read the second field of a labeled line as a boolean
    ///
    /// Accepts `true`/`false` in any case. Any other value returns
    /// `Ok(true)` rather than an error; only a missing line or missing
    /// value field fails.
    pub fn required_bool_or_default(&self, label: &str) -> Result<bool> {
        let line = self.required_value_line(label)?;

        // Only a literal false reads as false; unparsable values fall
        // back to true.
        Ok(!line.fields[1].eq_ignore_ascii_case("false"))
    }

    /// Find the labeled line, failing if it is absent
    fn required_line(&self, label: &str) -> Result<&Line> {
        self.line_by_label(label)?
            .ok_or_else(|| Error::LabelNotFound(label.to_string()))
    }

    /// Find the labeled line and require a value field after the label
    fn required_value_line(&self, label: &str) -> Result<&Line> {
        let line = self.required_line(label)?;

        if line.fields.len() < 2 {
            return Err(Error::MissingValue {
                label: label.to_string(),
            });
        }

        Ok(line)
    }
}
