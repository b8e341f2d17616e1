//! Configuration for reading and writing delimited tables.

use serde::{Deserialize, Serialize};

/// End-of-line string written between rows by default.
const PLATFORM_EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Configuration for a decode or encode pass.
///
/// A configuration is immutable for the duration of one call; both the
/// decoder and the encoder take it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Field separator character.
    pub separator: char,
    /// Quote character used for escaping separators and empty fields.
    /// Two consecutive quotes inside a quoted field escape one.
    pub quote: char,
    /// End-of-line string used when writing. Reading accepts `\n`, `\r\n`
    /// and `\r` regardless of this setting.
    pub eol: String,
    /// Text written at the top-left corner when both column and row
    /// headers are present.
    pub corner_text: String,
    /// Read the first line of the input as column headers.
    pub read_col_headers: bool,
    /// Write column headers, provided every column has one.
    pub write_col_headers: bool,
    /// Read the first field of each line as that row's header.
    pub read_row_headers: bool,
    /// Write row headers, provided every row has one.
    pub write_row_headers: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            quote: '"',
            eol: PLATFORM_EOL.to_string(),
            corner_text: "\\".to_string(),
            read_col_headers: true,
            write_col_headers: true,
            read_row_headers: false,
            write_row_headers: true,
        }
    }
}

impl TableConfig {
    /// Create a new default (CSV) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character.
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the end-of-line string used when writing.
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }

    /// Set the corner text written when both header kinds are present.
    pub fn with_corner_text(mut self, corner_text: impl Into<String>) -> Self {
        self.corner_text = corner_text.into();
        self
    }

    /// Set whether the first line is read as column headers.
    pub fn with_read_col_headers(mut self, read: bool) -> Self {
        self.read_col_headers = read;
        self
    }

    /// Set whether column headers are written.
    pub fn with_write_col_headers(mut self, write: bool) -> Self {
        self.write_col_headers = write;
        self
    }

    /// Set whether the first field of each line is read as a row header.
    pub fn with_read_row_headers(mut self, read: bool) -> Self {
        self.read_row_headers = read;
        self
    }

    /// Set whether row headers are written.
    pub fn with_write_row_headers(mut self, write: bool) -> Self {
        self.write_row_headers = write;
        self
    }

    /// Create CSV (comma-separated) configuration.
    pub fn csv() -> Self {
        Self::new()
    }

    /// Create TSV (tab-separated) configuration.
    pub fn tsv() -> Self {
        Self::new().with_separator('\t')
    }

    /// Create PRN (semicolon-separated) configuration.
    pub fn prn() -> Self {
        Self::new().with_separator(';')
    }

    /// Create pipe-separated configuration.
    pub fn pipe() -> Self {
        Self::new().with_separator('|')
    }
}
