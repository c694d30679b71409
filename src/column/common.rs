use std::fmt::{self, Debug};
use std::sync::Arc;

use serde::Serialize;

use crate::column::{Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};

/// Column type, decided once when a column is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::String => "string",
        };
        f.write_str(name)
    }
}

/// Operations shared by every typed column
pub trait ColumnTrait: Debug + Send + Sync {
    /// Number of rows, missing values included
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_type(&self) -> ColumnType;

    /// Whether the value at `index` is missing. Out of range counts as missing.
    fn is_null(&self, index: usize) -> bool;

    /// Number of missing values
    fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }

    /// Gathers the rows at `indices` (in that order) into a new column
    fn take(&self, indices: &[usize]) -> Result<Column>;
}

/// A column of one of the supported types
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int64(Int64Column),
    Float64(Float64Column),
    String(StringColumn),
}

/// Null bitmask helpers shared by the column implementations
pub mod utils {
    use super::*;

    /// Builds a bitmask where a set bit marks a missing value
    pub fn create_bitmask(nulls: &[bool]) -> Arc<[u8]> {
        let length = nulls.len();
        let bytes_needed = (length + 7) / 8;
        let mut data = vec![0u8; bytes_needed];

        for (i, &is_null) in nulls.iter().enumerate() {
            if is_null {
                data[i / 8] |= 1 << (i % 8);
            }
        }

        data.into()
    }

    /// Returns the mask only if at least one value is missing
    pub fn optional_bitmask(nulls: &[bool]) -> Option<Arc<[u8]>> {
        if nulls.iter().any(|&is_null| is_null) {
            Some(create_bitmask(nulls))
        } else {
            None
        }
    }

    pub fn is_set(mask: &[u8], index: usize) -> bool {
        let byte_idx = index / 8;
        byte_idx < mask.len() && (mask[byte_idx] & (1 << (index % 8))) != 0
    }

    /// Checks `indices` against a column of length `len`
    pub fn check_indices(indices: &[usize], len: usize) -> Result<()> {
        match indices.iter().find(|&&i| i >= len) {
            Some(&index) => Err(Error::IndexOutOfBounds { index, size: len }),
            None => Ok(()),
        }
    }
}

impl Column {
    /// Parses raw text fields into a column of the requested type.
    ///
    /// Empty fields become missing values. A non-empty field that does not
    /// parse as `ty` is rejected with [`Error::MixedColumnType`].
    pub fn from_raw(name: &str, raw: &[String], ty: ColumnType) -> Result<Self> {
        let mismatch = |row: usize, value: &str| Error::MixedColumnType {
            name: name.to_string(),
            row,
            value: value.to_string(),
            expected: ty,
        };

        match ty {
            ColumnType::Int64 => {
                let values = raw
                    .iter()
                    .enumerate()
                    .map(|(row, s)| {
                        if s.is_empty() {
                            Ok(None)
                        } else {
                            s.parse::<i64>().map(Some).map_err(|_| mismatch(row, s))
                        }
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Column::Int64(Int64Column::from_options(values)))
            }
            ColumnType::Float64 => {
                let values = raw
                    .iter()
                    .enumerate()
                    .map(|(row, s)| {
                        if s.is_empty() {
                            Ok(None)
                        } else {
                            s.parse::<f64>().map(Some).map_err(|_| mismatch(row, s))
                        }
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Column::Float64(Float64Column::from_options(values)))
            }
            ColumnType::String => Ok(Column::String(StringColumn::from_options(
                raw.iter()
                    .map(|s| if s.is_empty() { None } else { Some(s.clone()) })
                    .collect(),
            ))),
        }
    }

    /// Picks the narrowest type every non-empty field parses as:
    /// `Int64`, then `Float64`, falling back to `String`.
    pub fn infer_type(raw: &[String]) -> ColumnType {
        let mut non_empty = raw.iter().filter(|s| !s.is_empty()).peekable();
        if non_empty.peek().is_none() {
            return ColumnType::String;
        }

        let fields: Vec<&String> = non_empty.collect();
        if fields.iter().all(|s| s.parse::<i64>().is_ok()) {
            ColumnType::Int64
        } else if fields.iter().all(|s| s.parse::<f64>().is_ok()) {
            ColumnType::Float64
        } else {
            ColumnType::String
        }
    }

    /// Builds a column from raw fields, inferring its type
    pub fn infer(name: &str, raw: &[String]) -> Result<Self> {
        Self::from_raw(name, raw, Self::infer_type(raw))
    }

    /// A column of `len` missing values
    pub fn nulls(ty: ColumnType, len: usize) -> Self {
        match ty {
            ColumnType::Int64 => Column::Int64(Int64Column::from_options(vec![None; len])),
            ColumnType::Float64 => Column::Float64(Float64Column::from_options(vec![None; len])),
            ColumnType::String => Column::String(StringColumn::from_options(vec![None; len])),
        }
    }

    fn inner(&self) -> &dyn ColumnTrait {
        match self {
            Column::Int64(col) => col,
            Column::Float64(col) => col,
            Column::String(col) => col,
        }
    }

    pub fn len(&self) -> usize {
        self.inner().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        self.inner().column_type()
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.inner().is_null(index)
    }

    pub fn null_count(&self) -> usize {
        self.inner().null_count()
    }

    pub fn take(&self, indices: &[usize]) -> Result<Column> {
        self.inner().take(indices)
    }

    pub fn as_int64(&self) -> Option<&Int64Column> {
        match self {
            Column::Int64(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<&Float64Column> {
        match self {
            Column::Float64(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringColumn> {
        match self {
            Column::String(col) => Some(col),
            _ => None,
        }
    }

    /// Row-aligned numeric view; `None` marks a missing value.
    /// Fails for text columns.
    pub fn numeric_options(&self, name: &str) -> Result<Vec<Option<f64>>> {
        match self {
            Column::Int64(col) => Ok(col.iter().map(|v| v.and_then(|x| num_traits::cast(x))).collect()),
            Column::Float64(col) => Ok(col.iter().collect()),
            Column::String(_) => Err(Error::ColumnTypeMismatch {
                name: name.to_string(),
                expected: ColumnType::Float64,
                found: ColumnType::String,
            }),
        }
    }

    /// Non-missing values as `f64`, in row order
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.numeric_options(name)?.into_iter().flatten().collect())
    }

    /// Text rendering of one cell; `None` for missing values.
    /// Floats always keep a decimal point or exponent so they read back as floats.
    pub fn format_value(&self, index: usize) -> Option<String> {
        match self {
            Column::Int64(col) => col.get(index).ok().flatten().map(|v| v.to_string()),
            Column::Float64(col) => col.get(index).ok().flatten().map(|v| format!("{:?}", v)),
            Column::String(col) => col.get(index).ok().flatten().map(|v| v.to_string()),
        }
    }

    /// Widens an `Int64` column to `Float64`; other columns are returned as is
    pub fn to_float64(&self) -> Column {
        match self {
            Column::Int64(col) => Column::Float64(Float64Column::from_options(
                col.iter().map(|v| v.and_then(|x| num_traits::cast(x))).collect(),
            )),
            other => other.clone(),
        }
    }

    /// Appends `other` below `self`. Both columns must share a type.
    pub fn append(&self, other: &Column, name: &str) -> Result<Column> {
        match (self, other) {
            (Column::Int64(a), Column::Int64(b)) => Ok(Column::Int64(Int64Column::from_options(
                a.iter().chain(b.iter()).collect(),
            ))),
            (Column::Float64(a), Column::Float64(b)) => Ok(Column::Float64(
                Float64Column::from_options(a.iter().chain(b.iter()).collect()),
            )),
            (Column::String(a), Column::String(b)) => Ok(Column::String(
                StringColumn::from_options(
                    a.iter()
                        .chain(b.iter())
                        .map(|v| v.map(str::to_string))
                        .collect(),
                ),
            )),
            _ => Err(Error::ColumnTypeMismatch {
                name: name.to_string(),
                expected: self.column_type(),
                found: other.column_type(),
            }),
        }
    }
}

impl From<Int64Column> for Column {
    fn from(col: Int64Column) -> Self {
        Column::Int64(col)
    }
}

impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}
