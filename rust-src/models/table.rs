//! Literal in-memory tables used as chart and page input.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;


/// Errors raised while assembling a table literal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("column '{column}' has {found} values, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),
}


/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
}


impl Scalar {
    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}


impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}


impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Number(n) => serializer.serialize_f64(*n),
            Scalar::Text(s) => serializer.serialize_str(s),
        }
    }
}


impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}


/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Scalar>,
}


/// Build a column from any iterator of cell-convertible values.
pub fn column<V: Into<Scalar>>(name: &str, values: impl IntoIterator<Item = V>) -> Column {
    Column {
        name: name.to_string(),
        values: values.into_iter().map(Into::into).collect(),
    }
}


/// Ordered records sharing one column set.
///
/// Stored column-major so that every record has the same columns by
/// construction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    columns: Vec<Column>,
}


impl DataTable {
    /// Assemble a table from columns of equal length with unique names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let expected = columns.first().map(|c| c.values.len()).unwrap_or(0);

        for (idx, col) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|other| other.name == col.name) {
                return Err(TableError::DuplicateColumn(col.name.clone()));
            }
            if col.values.len() != expected {
                return Err(TableError::RaggedColumn {
                    column: col.name.clone(),
                    expected,
                    found: col.values.len(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&[Scalar]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Numeric values of a column; text cells map to `None`.
    pub fn numbers(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|values| values.iter().map(Scalar::as_f64).collect())
    }

    /// Record `idx` as (column, value) pairs in column order.
    pub fn record(&self, idx: usize) -> Option<Vec<(&str, &Scalar)>> {
        if idx >= self.len() {
            return None;
        }

        Some(
            self.columns
                .iter()
                .map(|c| (c.name.as_str(), &c.values[idx]))
                .collect(),
        )
    }

    /// Iterate over all records in order.
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &Scalar)>> {
        (0..self.len()).filter_map(move |idx| self.record(idx))
    }
}
