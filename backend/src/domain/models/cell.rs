//! Spreadsheet cells as the data source hands them over.

/// Typed raw value of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

/// A cell carries a raw value, a display string, both, or neither
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub value: Option<CellValue>,
    pub formatted: Option<String>,
}

impl Cell {
    pub fn number(value: f64) -> Self {
        Self {
            value: Some(CellValue::Number(value)),
            formatted: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(CellValue::Text(value.into())),
            formatted: None,
        }
    }

    pub fn formatted(display: impl Into<String>) -> Self {
        Self {
            value: None,
            formatted: Some(display.into()),
        }
    }
}

/// Cells in column order; `None` marks a cell the source left out
pub type Row = Vec<Option<Cell>>;
