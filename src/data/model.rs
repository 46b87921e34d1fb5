use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Value – a single dynamically-typed cell, used while loading
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
/// Loaders produce these; [`ColumnBuilder`] resolves them into a typed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Null => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – a typed series of cells
// ---------------------------------------------------------------------------

/// A typed column. Missing values are `""` in string columns and
/// `f64::NAN` in float columns; integer columns never hold missing values
/// (the builder promotes such columns to `Float` instead).
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Str(Vec<String>),
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl Column {
    /// Number of cells in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Str(v) => v.len(),
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
        }
    }

    /// Whether the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable type name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Str(_) => "string",
            Column::Int(_) => "integer",
            Column::Float(_) => "float",
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnBuilder – column-wise type inference
// ---------------------------------------------------------------------------

/// Accumulates [`Value`] cells and resolves the column type once complete:
/// all-integer → `Int`; integers, floats and nulls mixed → `Float`
/// (nulls become NaN); anything else → `Str` (nulls become `""`).
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    cells: Vec<Value>,
}

impl ColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Parse a raw text cell the way the upstream CSVs encode values:
    /// empty → null, then integer, then float, else string.
    pub fn push_text(&mut self, raw: &str) {
        let cell = if raw.is_empty() {
            Value::Null
        } else if let Ok(i) = raw.parse::<i64>() {
            Value::Integer(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            Value::Float(f)
        } else {
            Value::String(raw.to_string())
        };
        self.cells.push(cell);
    }

    pub fn finish(self) -> Column {
        let mut any_null = false;
        let mut any_float = false;
        let mut any_string = false;
        for cell in &self.cells {
            match cell {
                Value::Null => any_null = true,
                Value::Float(_) => any_float = true,
                Value::String(_) => any_string = true,
                Value::Integer(_) => {}
            }
        }

        if any_string {
            Column::Str(self.cells.into_iter().map(|c| c.to_string()).collect())
        } else if any_float || any_null {
            Column::Float(
                self.cells
                    .into_iter()
                    .map(|c| match c {
                        Value::Integer(i) => i as f64,
                        Value::Float(f) => f,
                        _ => f64::NAN,
                    })
                    .collect(),
            )
        } else {
            Column::Int(
                self.cells
                    .into_iter()
                    .filter_map(|c| match c {
                        Value::Integer(i) => Some(i),
                        _ => None,
                    })
                    .collect(),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// DataError
// ---------------------------------------------------------------------------

/// Structural problems with a dataset or a column access, distinct from the
/// validation conditions in [`crate::checks::CheckError`].
#[derive(Debug, Error)]
pub enum DataError {
    #[error("column '{name}' has {len} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },
    #[error("no such column: '{0}'")]
    UnknownColumn(String),
    #[error("column '{name}' is {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An in-memory columnar table: named typed columns in a fixed order, all of
/// the same length. Read-only once constructed; the checks never mutate it.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from ordered `(name, column)` pairs, verifying that
    /// every column has the same row count.
    pub fn from_columns(columns: Vec<(String, Column)>) -> Result<Self, DataError> {
        let rows = columns.first().map_or(0, |(_, c)| c.len());
        for (name, col) in &columns {
            if col.len() != rows {
                return Err(DataError::LengthMismatch {
                    name: name.clone(),
                    len: col.len(),
                    expected: rows,
                });
            }
        }
        Ok(Dataset { columns, rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Ordered column names, as loaded.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, DataError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
    }

    /// String view of a categorical column.
    pub fn categorical(&self, name: &str) -> Result<&[String], DataError> {
        match self.column(name)? {
            Column::Str(v) => Ok(v),
            other => Err(DataError::TypeMismatch {
                name: name.to_string(),
                expected: "string",
                found: other.type_name(),
            }),
        }
    }

    /// Numeric view of a column; integer columns are promoted to `f64`.
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>, DataError> {
        match self.column(name)? {
            Column::Float(v) => Ok(v.clone()),
            Column::Int(v) => Ok(v.iter().map(|&i| i as f64).collect()),
            other => Err(DataError::TypeMismatch {
                name: name.to_string(),
                expected: "numeric",
                found: other.type_name(),
            }),
        }
    }

    /// Sorted set of distinct values of a categorical column.
    pub fn unique(&self, name: &str) -> Result<BTreeSet<&str>, DataError> {
        Ok(self.categorical(name)?.iter().map(String::as_str).collect())
    }

    /// Per-category row counts of a categorical column, ordered by category
    /// name. The ordering is load-bearing: it aligns two datasets' count
    /// vectors before divergence is computed.
    pub fn value_counts(&self, name: &str) -> Result<BTreeMap<&str, u64>, DataError> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for value in self.categorical(name)? {
            *counts.entry(value.as_str()).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[&str]) -> Column {
        let mut b = ColumnBuilder::new();
        for v in values {
            b.push_text(v);
        }
        b.finish()
    }

    #[test]
    fn all_integer_cells_make_an_int_column() {
        assert_eq!(build(&["1", "2", "3"]), Column::Int(vec![1, 2, 3]));
    }

    #[test]
    fn nulls_promote_integers_to_float() {
        match build(&["1", "", "3"]) {
            Column::Float(v) => {
                assert_eq!(v[0], 1.0);
                assert!(v[1].is_nan());
                assert_eq!(v[2], 3.0);
            }
            other => panic!("expected float column, got {other:?}"),
        }
    }

    #[test]
    fn mixed_text_falls_back_to_string() {
        assert_eq!(
            build(&["1", "Brooklyn", ""]),
            Column::Str(vec!["1".into(), "Brooklyn".into(), String::new()])
        );
    }

    #[test]
    fn mismatched_column_lengths_are_rejected() {
        let err = Dataset::from_columns(vec![
            ("a".into(), Column::Int(vec![1, 2])),
            ("b".into(), Column::Int(vec![1])),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::LengthMismatch { .. }));
    }

    #[test]
    fn value_counts_are_sorted_by_category() {
        let data = Dataset::from_columns(vec![(
            "borough".into(),
            Column::Str(vec!["Queens".into(), "Bronx".into(), "Queens".into()]),
        )])
        .unwrap();
        let entries: Vec<_> = data.value_counts("borough").unwrap().into_iter().collect();
        assert_eq!(entries, vec![("Bronx", 1), ("Queens", 2)]);
    }
}
