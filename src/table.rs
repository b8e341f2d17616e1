//! Table storage abstraction.

/// A mutable 2-D grid addressed by `(column, row)`, 0-based, with optional
/// per-column and per-row header strings.
///
/// The decoder creates a table empty and populates it line by line; the
/// encoder only reads. Cells of a freshly appended row or column start
/// unset until written. An absent header is `None`, never a sentinel
/// string, so "no header" stays distinguishable from an empty-string
/// header.
pub trait Table {
    /// The cell value type.
    type Value;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Append one column per header string, each with all cells unset.
    fn append_header_columns(&mut self, headers: &[String]);

    /// Append `count` headerless columns, each with all cells unset.
    fn append_columns(&mut self, count: usize);

    /// Append one row with all cells unset, optionally with a header.
    fn append_row(&mut self, header: Option<&str>);

    /// Write a cell value. Out-of-range coordinates are ignored.
    fn set(&mut self, col: usize, row: usize, value: Self::Value);

    /// Read a cell value. Unset and out-of-range cells are `None`.
    fn get(&self, col: usize, row: usize) -> Option<&Self::Value>;

    /// The header of a column, if it has one.
    fn column_header(&self, col: usize) -> Option<&str>;

    /// The header of a row, if it has one.
    fn row_header(&self, row: usize) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq)]
struct Column<V> {
    header: Option<String>,
    cells: Vec<Option<V>>,
}

/// In-memory, column-major [`Table`] implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct MemTable<V> {
    columns: Vec<Column<V>>,
    row_headers: Vec<Option<String>>,
}

impl<V> MemTable<V> {
    /// Create an empty table with zero rows and columns.
    pub fn new() -> Self {
        MemTable {
            columns: Vec::new(),
            row_headers: Vec::new(),
        }
    }

    /// Create a headerless table from row-major data, one column per value
    /// of the widest row.
    pub fn from_rows(rows: Vec<Vec<V>>) -> Self {
        let mut table = Self::new();
        let max_cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        table.append_columns(max_cols);
        for (row_idx, row) in rows.into_iter().enumerate() {
            table.append_row(None);
            for (col_idx, value) in row.into_iter().enumerate() {
                table.set(col_idx, row_idx, value);
            }
        }
        table
    }

    /// Replace the header of an existing column. Out-of-range indices are
    /// ignored.
    pub fn set_column_header(&mut self, col: usize, header: Option<&str>) {
        if let Some(column) = self.columns.get_mut(col) {
            column.header = header.map(str::to_owned);
        }
    }

    /// Replace the header of an existing row. Out-of-range indices are
    /// ignored.
    pub fn set_row_header(&mut self, row: usize, header: Option<&str>) {
        if let Some(slot) = self.row_headers.get_mut(row) {
            *slot = header.map(str::to_owned);
        }
    }
}

impl<V> Default for MemTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Table for MemTable<V> {
    type Value = V;

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn row_count(&self) -> usize {
        self.row_headers.len()
    }

    fn append_header_columns(&mut self, headers: &[String]) {
        for header in headers {
            self.columns.push(Column {
                header: Some(header.clone()),
                cells: (0..self.row_headers.len()).map(|_| None).collect(),
            });
        }
    }

    fn append_columns(&mut self, count: usize) {
        for _ in 0..count {
            self.columns.push(Column {
                header: None,
                cells: (0..self.row_headers.len()).map(|_| None).collect(),
            });
        }
    }

    fn append_row(&mut self, header: Option<&str>) {
        self.row_headers.push(header.map(str::to_owned));
        for column in &mut self.columns {
            column.cells.push(None);
        }
    }

    fn set(&mut self, col: usize, row: usize, value: V) {
        if let Some(slot) = self
            .columns
            .get_mut(col)
            .and_then(|column| column.cells.get_mut(row))
        {
            *slot = Some(value);
        }
    }

    fn get(&self, col: usize, row: usize) -> Option<&V> {
        self.columns
            .get(col)?
            .cells
            .get(row)?
            .as_ref()
    }

    fn column_header(&self, col: usize) -> Option<&str> {
        self.columns.get(col)?.header.as_deref()
    }

    fn row_header(&self, row: usize) -> Option<&str> {
        self.row_headers.get(row)?.as_deref()
    }
}
