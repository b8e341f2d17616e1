//! Text to table decoding.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::TableConfig;
use crate::error::{Error, Result};
use crate::table::{MemTable, Table};
use crate::tokenizer::tokenize;
use crate::value::ValueCodec;

/// Split text into lines on `\n`, `\r\n` or `\r`, dropping trailing empty
/// lines so a terminating line break does not produce a phantom row.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Decode delimited text into a fresh [`MemTable`].
///
/// See [`decode_into`] for the decoding rules.
pub fn decode<C>(text: &str, config: &TableConfig, codec: &C) -> Result<MemTable<C::Value>>
where
    C: ValueCodec,
{
    let mut table = MemTable::new();
    decode_into(text, config, codec, &mut table)?;
    Ok(table)
}

/// Decode delimited text into a caller-supplied table.
///
/// The first line establishes the column count. With
/// [`read_col_headers`](TableConfig::read_col_headers) it becomes the
/// column headers and contributes no data row; otherwise it is the first
/// data row. With [`read_row_headers`](TableConfig::read_row_headers) the
/// first field of every line is that row's header. Each data field goes
/// through `codec.parse` before being written to its cell.
///
/// Empty input leaves the table untouched. Any tokenizer failure or a row
/// whose field count differs from the established column count aborts the
/// whole decode; the table's contents are unspecified after an error and
/// must be discarded.
pub fn decode_into<C, T>(text: &str, config: &TableConfig, codec: &C, table: &mut T) -> Result<()>
where
    C: ValueCodec,
    T: Table<Value = C::Value>,
{
    let lines = split_lines(text);
    let Some((first, rest)) = lines.split_first() else {
        return Ok(());
    };

    let tokens = tokenize(first, config.quote, config.separator)?;
    if config.read_col_headers {
        let headers = if config.read_row_headers {
            &tokens[1..]
        } else {
            &tokens[..]
        };
        table.append_header_columns(headers);
    } else {
        let cells: &[String] = if config.read_row_headers {
            table.append_columns(tokens.len() - 1);
            table.append_row(Some(&tokens[0]));
            &tokens[1..]
        } else {
            table.append_columns(tokens.len());
            table.append_row(None);
            &tokens
        };
        for (col, field) in cells.iter().enumerate() {
            table.set(col, 0, codec.parse(field)?);
        }
    }

    for line in rest {
        let tokens = tokenize(line, config.quote, config.separator)?;
        let row = table.row_count();
        let cells: &[String] = if config.read_row_headers {
            table.append_row(Some(&tokens[0]));
            &tokens[1..]
        } else {
            table.append_row(None);
            &tokens
        };
        if cells.len() != table.column_count() {
            return Err(Error::RowLengthMismatch {
                row,
                expected: table.column_count(),
                found: cells.len(),
            });
        }
        for (col, field) in cells.iter().enumerate() {
            table.set(col, row, codec.parse(field)?);
        }
    }

    Ok(())
}

/// Read a whole source into memory and decode it.
///
/// The input is not streamed; it is read to a string first, so read
/// failures surface as [`Error::Io`] before any decoding starts.
pub fn decode_reader<R, C>(mut reader: R, config: &TableConfig, codec: &C) -> Result<MemTable<C::Value>>
where
    R: Read,
    C: ValueCodec,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode(&text, config, codec)
}

/// Open a file and decode its contents.
pub fn decode_path<P, C>(path: P, config: &TableConfig, codec: &C) -> Result<MemTable<C::Value>>
where
    P: AsRef<Path>,
    C: ValueCodec,
{
    decode_reader(File::open(path)?, config, codec)
}
