//! Normalized export of parsed line tables

use crate::error::{Error, Result};
use crate::table::LineTable;
use std::io::Write;

/// Write the table as CSV using its own delimiter
///
/// Fields are re-emitted in their trimmed form. A blank line is written
/// as a single empty field, which keeps it an empty line in the output.
pub fn export_csv<W: Write>(table: &LineTable, writer: W) -> Result<()> {
    let delimiter =
        u8::try_from(table.delimiter).map_err(|_| Error::WideDelimiter(table.delimiter))?;

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);

    for line in &table.lines {
        if line.fields.is_empty() {
            csv_writer.write_record([""])?;
        } else {
            csv_writer.write_record(&line.fields)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the table as pretty-printed JSON
pub fn export_json<W: Write>(table: &LineTable, mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_export_csv_normalizes_fields() {
        let table = parse_str(" A , 1 \nB,2\n", ',');
        let mut out = Vec::new();
        export_csv(&table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "A,1\nB,2\n");
    }

    #[test]
    fn test_export_csv_keeps_blank_lines() {
        let table = parse_str("A,1\n\nB,2\n", ',');
        let mut out = Vec::new();
        export_csv(&table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "A,1\n\nB,2\n");
    }

    #[test]
    fn test_export_csv_alternate_delimiter() {
        let table = parse_str("A;1\n", ';');
        let mut out = Vec::new();
        export_csv(&table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "A;1\n");
    }

    #[test]
    fn test_export_csv_wide_delimiter() {
        let table = LineTable::new('→');
        let mut out = Vec::new();
        assert!(matches!(
            export_csv(&table, &mut out),
            Err(Error::WideDelimiter('→'))
        ));
    }

    #[test]
    fn test_export_json_round_trips() {
        let table = parse_str("A,1\nB,2\n", ',');
        let mut out = Vec::new();
        export_json(&table, &mut out).unwrap();

        let loaded: LineTable = serde_json::from_slice(&out).unwrap();
        assert_eq!(loaded.delimiter, ',');
        assert_eq!(loaded.lines, table.lines);
    }
}
