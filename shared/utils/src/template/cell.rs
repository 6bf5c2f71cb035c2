//! Typed view over spreadsheet cells.

use calamine::{CellErrorType, DataType};

/// A single cell as the template reader sees it.
///
/// Only `Text` takes part in list splitting. An empty string is reported as
/// `Empty`, so a blank-but-typed cell behaves like a missing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Error(&'a CellErrorType),
    Empty,
}

impl<'a> From<&'a DataType> for CellValue<'a> {
    fn from(value: &'a DataType) -> Self {
        match value {
            DataType::String(s) | DataType::DateTimeIso(s) | DataType::DurationIso(s) => {
                if s.is_empty() {
                    Self::Empty
                } else {
                    Self::Text(s)
                }
            }
            DataType::Int(i) => Self::Number(*i as f64),
            DataType::Float(f) | DataType::DateTime(f) | DataType::Duration(f) => Self::Number(*f),
            DataType::Bool(b) => Self::Bool(*b),
            DataType::Error(e) => Self::Error(e),
            DataType::Empty => Self::Empty,
        }
    }
}

impl<'a> CellValue<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Scalar rendering of the cell. `None` for empty and error cells.
    pub fn to_scalar(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some((*s).to_string()),
            Self::Number(n) => Some(render_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Error(_) | Self::Empty => None,
        }
    }

    /// Delimited list rendering. Anything that is not text is an empty list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::Text(s) => split_list(s),
            Self::Number(_) | Self::Bool(_) | Self::Error(_) | Self::Empty => Vec::new(),
        }
    }
}

/// Split a `;` delimited cell and trim every piece.
///
/// Empty pieces are kept: `"A;;B"` gives `["A", "", "B"]`.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(';').map(|piece| piece.trim().to_string()).collect()
}

/// Spreadsheets store every number as a float; integral values are written
/// back without the fractional part so a version cell `1` reads as `"1"`.
fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
