//! Textable - a bidirectional codec between delimited text and in-memory tables
//!
//! This library converts between a delimited-text representation (CSV, TSV,
//! PRN, or any single-character delimiter) and a tabular data structure with
//! optional row and column headers and typed cells.
//!
//! # Features
//!
//! - **Configurable dialect**: Separator, quote character, end-of-line string,
//!   and corner text are all configurable with CSV defaults
//! - **Quote handling**: Doubled-quote escaping, plus the permissive rule that
//!   quoted and unquoted segments may concatenate within one field
//! - **Optional headers**: Row and column headers are read and written
//!   independently; an absent header is distinguishable from an empty one
//! - **Pluggable cell conversion**: A [`ValueCodec`] strategy converts between
//!   field strings and cell values in both directions
//! - **Strict validation**: Unbalanced quotes and ragged rows abort the whole
//!   decode instead of producing a misparsed table
//!
//! # Quick Start
//!
//! ```rust
//! use textable::{decode, encode, StringCodec, Table, TableConfig};
//!
//! let config = TableConfig::csv();
//!
//! // First line becomes column headers with the default configuration.
//! let table = decode("name,age\nAlice,30\nBob,25", &config, &StringCodec)?;
//! assert_eq!(table.column_header(1), Some("age"));
//! assert_eq!(table.get(1, 0), Some(&"30".to_string()));
//!
//! // Encoding mirrors the decode, including the header line.
//! let text = encode(&table, &config, &StringCodec)?;
//! assert!(text.starts_with("name,age"));
//! # Ok::<(), textable::Error>(())
//! ```

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod table;
pub mod tokenizer;
pub mod value;

pub use config::TableConfig;
pub use decoder::{decode, decode_into, decode_path, decode_reader};
pub use encoder::{encode, encode_path, encode_writer};
pub use error::{Error, Result};
pub use table::{MemTable, Table};
pub use tokenizer::tokenize;
pub use value::{CellValue, InferCodec, StringCodec, ValueCodec};
