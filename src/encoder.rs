//! Table to text encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::TableConfig;
use crate::error::Result;
use crate::table::Table;
use crate::value::ValueCodec;

/// Quote a field if it is empty, contains the quote character, or contains
/// the separator. Internal quote characters are doubled; nothing else
/// triggers quoting.
fn quote_field(field: &str, quote: char, separator: char) -> String {
    if field.is_empty() {
        let mut quoted = String::new();
        quoted.push(quote);
        quoted.push(quote);
        return quoted;
    }
    if field.contains(quote) {
        let mut doubled = String::with_capacity(2);
        doubled.push(quote);
        doubled.push(quote);
        let escaped = field.replace(quote, &doubled);
        let mut quoted = String::with_capacity(escaped.len() + 2);
        quoted.push(quote);
        quoted.push_str(&escaped);
        quoted.push(quote);
        return quoted;
    }
    if field.contains(separator) {
        let mut quoted = String::with_capacity(field.len() + 2);
        quoted.push(quote);
        quoted.push_str(field);
        quoted.push(quote);
        return quoted;
    }
    field.to_owned()
}

/// Encode a table as delimited text.
///
/// Headers are written only when every row (or column) has one: a single
/// absent header suppresses that axis entirely rather than emitting a
/// partial header line or column. When both header kinds are written, the
/// configured corner text occupies the top-left position. Unset cells
/// encode as an explicitly quoted empty field. Each data cell goes through
/// `codec.format` before the quoting policy is applied.
pub fn encode<C, T>(table: &T, config: &TableConfig, codec: &C) -> Result<String>
where
    C: ValueCodec,
    T: Table<Value = C::Value>,
{
    let cols = table.column_count();
    let rows = table.row_count();
    let write_rh = config.write_row_headers
        && rows > 0
        && (0..rows).all(|row| table.row_header(row).is_some());
    let write_ch = config.write_col_headers
        && cols > 0
        && (0..cols).all(|col| table.column_header(col).is_some());

    let quoted = |field: &str| quote_field(field, config.quote, config.separator);
    let cell = |col: usize, row: usize| -> Result<String> {
        match table.get(col, row) {
            Some(value) => codec.format(value),
            None => Ok(String::new()),
        }
    };

    let mut out = String::new();
    if write_ch {
        if write_rh {
            out.push_str(&quoted(&config.corner_text));
            if cols > 0 {
                out.push(config.separator);
                out.push_str(&quoted(table.column_header(0).unwrap_or("")));
            }
        } else if cols > 0 {
            // No leading separator when there are zero columns.
            out.push_str(&quoted(table.column_header(0).unwrap_or("")));
        }
        for col in 1..cols {
            out.push(config.separator);
            out.push_str(&quoted(table.column_header(col).unwrap_or("")));
        }
        out.push_str(&config.eol);
    }

    for row in 0..rows {
        if write_rh {
            out.push_str(&quoted(table.row_header(row).unwrap_or("")));
            if cols > 0 {
                out.push(config.separator);
                out.push_str(&quoted(&cell(0, row)?));
            }
        } else if cols > 0 {
            out.push_str(&quoted(&cell(0, row)?));
        }
        for col in 1..cols {
            out.push(config.separator);
            out.push_str(&quoted(&cell(col, row)?));
        }
        out.push_str(&config.eol);
    }

    Ok(out)
}

/// Encode a table and write the text to a writer.
pub fn encode_writer<W, C, T>(
    mut writer: W,
    table: &T,
    config: &TableConfig,
    codec: &C,
) -> Result<()>
where
    W: Write,
    C: ValueCodec,
    T: Table<Value = C::Value>,
{
    let text = encode(table, config, codec)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Encode a table and write the text to a file.
pub fn encode_path<P, C, T>(path: P, table: &T, config: &TableConfig, codec: &C) -> Result<()>
where
    P: AsRef<Path>,
    C: ValueCodec,
    T: Table<Value = C::Value>,
{
    encode_writer(BufWriter::new(File::create(path)?), table, config, codec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MemTable;
    use crate::value::StringCodec;

    fn config() -> TableConfig {
        TableConfig::csv().with_eol("\n")
    }

    fn owned(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quote_field_policy() {
        assert_eq!(quote_field("", '"', ','), "\"\"");
        assert_eq!(quote_field("plain", '"', ','), "plain");
        assert_eq!(quote_field("a,b", '"', ','), "\"a,b\"");
        assert_eq!(quote_field("a\"b", '"', ','), "\"a\"\"b\"");
        // Whitespace and line breaks alone do not trigger quoting.
        assert_eq!(quote_field("a b", '"', ','), "a b");
    }

    #[test]
    fn test_headerless_rows() {
        let table = MemTable::from_rows(vec![owned(&["a", "b"]), owned(&["c", "d"])]);
        let text = encode(&table, &config(), &StringCodec).unwrap();
        assert_eq!(text, "a,b\nc,d\n");
    }

    #[test]
    fn test_column_headers() {
        let mut table: MemTable<String> = MemTable::new();
        table.append_header_columns(&owned(&["x", "y"]));
        table.append_row(None);
        table.set(0, 0, "1".to_string());
        table.set(1, 0, "2".to_string());
        let text = encode(&table, &config(), &StringCodec).unwrap();
        assert_eq!(text, "x,y\n1,2\n");
    }

    #[test]
    fn test_corner_text_with_both_header_kinds() {
        let mut table: MemTable<String> = MemTable::new();
        table.append_header_columns(&owned(&["x", "y"]));
        table.append_row(Some("r0"));
        table.set(0, 0, "1".to_string());
        table.set(1, 0, "2".to_string());
        let text = encode(&table, &config(), &StringCodec).unwrap();
        assert_eq!(text, "\\,x,y\nr0,1,2\n");
    }

    #[test]
    fn test_one_missing_row_header_suppresses_the_axis() {
        let mut table: MemTable<String> = MemTable::new();
        table.append_columns(1);
        table.append_row(Some("r0"));
        table.append_row(None);
        table.set(0, 0, "a".to_string());
        table.set(0, 1, "b".to_string());
        let text = encode(&table, &config(), &StringCodec).unwrap();
        // No row-header column at all, not a column of empty strings.
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_one_missing_col_header_suppresses_the_line() {
        let mut table: MemTable<String> = MemTable::new();
        table.append_header_columns(&owned(&["x"]));
        table.append_columns(1);
        table.append_row(None);
        table.set(0, 0, "a".to_string());
        table.set(1, 0, "b".to_string());
        let text = encode(&table, &config(), &StringCodec).unwrap();
        assert_eq!(text, "a,b\n");
    }

    #[test]
    fn test_unset_cell_is_quoted_empty() {
        let mut table: MemTable<String> = MemTable::new();
        table.append_columns(2);
        table.append_row(None);
        table.set(0, 0, "a".to_string());
        let text = encode(&table, &config(), &StringCodec).unwrap();
        assert_eq!(text, "a,\"\"\n");
    }

    #[test]
    fn test_zero_columns_with_row_headers() {
        let mut table: MemTable<String> = MemTable::new();
        table.append_row(Some("r0"));
        table.append_row(Some("r1"));
        let text = encode(&table, &config(), &StringCodec).unwrap();
        // Only the header fields, no stray separators.
        assert_eq!(text, "r0\nr1\n");
    }

    #[test]
    fn test_empty_table_encodes_to_nothing() {
        let table: MemTable<String> = MemTable::new();
        let text = encode(&table, &config(), &StringCodec).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_configured_eol_and_separator() {
        let cfg = TableConfig::prn().with_eol("\r\n").with_write_col_headers(false);
        let table = MemTable::from_rows(vec![owned(&["a", "b"])]);
        let text = encode(&table, &cfg, &StringCodec).unwrap();
        assert_eq!(text, "a;b\r\n");
    }
}
