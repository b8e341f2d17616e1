//! Cell value conversion strategies.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Converts between the textual field representation and a cell value.
///
/// The codec itself is agnostic to the concrete value type: the decoder
/// calls [`parse`](ValueCodec::parse) once per data cell and the encoder
/// calls [`format`](ValueCodec::format) once per data cell, non-overlapping.
/// Implementations must be pure; hidden state shared between calls is
/// outside the contract. Errors returned from either direction abort the
/// whole operation and are propagated with their source intact.
pub trait ValueCodec {
    /// The in-memory cell value type.
    type Value;

    /// Convert one field string into a cell value.
    fn parse(&self, field: &str) -> Result<Self::Value>;

    /// Convert one cell value into its field string.
    fn format(&self, value: &Self::Value) -> Result<String>;
}

/// Identity codec: cells are stored as the field strings themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl ValueCodec for StringCodec {
    type Value = String;

    fn parse(&self, field: &str) -> Result<String> {
        Ok(field.to_owned())
    }

    fn format(&self, value: &String) -> Result<String> {
        Ok(value.clone())
    }
}

/// Types of data an inferred cell can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Empty cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
}

/// Codec that infers a [`CellValue`] from each field.
///
/// Parse order: empty field, integer, float, boolean literal, string.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferCodec;

impl ValueCodec for InferCodec {
    type Value = CellValue;

    fn parse(&self, field: &str) -> Result<CellValue> {
        if field.is_empty() {
            return Ok(CellValue::Empty);
        }
        if let Ok(int_val) = field.parse::<i64>() {
            return Ok(CellValue::Int(int_val));
        }
        if let Ok(float_val) = fast_float2::parse(field) {
            return Ok(CellValue::Float(float_val));
        }
        if field.eq_ignore_ascii_case("true") {
            return Ok(CellValue::Bool(true));
        }
        if field.eq_ignore_ascii_case("false") {
            return Ok(CellValue::Bool(false));
        }
        Ok(CellValue::String(field.to_owned()))
    }

    fn format(&self, value: &CellValue) -> Result<String> {
        Ok(match value {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => if *b { "true" } else { "false" }.to_owned(),
            CellValue::Int(i) => itoa::Buffer::new().format(*i).to_owned(),
            CellValue::Float(f) => ryu::Buffer::new().format(*f).to_owned(),
            CellValue::String(s) => s.clone(),
        })
    }
}
