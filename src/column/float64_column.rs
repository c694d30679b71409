use std::sync::Arc;

use crate::column::common::{utils, Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of 64-bit floats. NaN is treated as a missing value.
#[derive(Debug, Clone)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl Float64Column {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Creates a column where `nulls[i] == true` marks row `i` as missing
    pub fn with_nulls(data: Vec<f64>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
        }
    }

    /// NaN entries are stored as missing values
    pub fn from_options(values: Vec<Option<f64>>) -> Self {
        let values: Vec<Option<f64>> = values
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data: Vec<f64> = values.into_iter().map(|v| v.unwrap_or_default()).collect();
        Self::with_nulls(data, nulls)
    }

    pub fn get(&self, index: usize) -> Result<Option<f64>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        Ok(Some(self.data[index]))
    }

    /// Iterates values in row order, `None` for missing entries
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        (0..self.data.len()).map(move |i| {
            if self.is_null(i) {
                None
            } else {
                Some(self.data[i])
            }
        })
    }
}

// Missing entries compare equal regardless of the placeholder stored for them
impl PartialEq for Float64Column {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && self.iter().eq(other.iter())
    }
}

impl ColumnTrait for Float64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Float64
    }

    fn is_null(&self, index: usize) -> bool {
        match &self.null_mask {
            None => index >= self.data.len() || self.data[index].is_nan(),
            Some(mask) => {
                index >= self.data.len() || utils::is_set(mask, index) || self.data[index].is_nan()
            }
        }
    }

    fn take(&self, indices: &[usize]) -> Result<Column> {
        utils::check_indices(indices, self.data.len())?;
        let values = indices
            .iter()
            .map(|&i| if self.is_null(i) { None } else { Some(self.data[i]) })
            .collect();
        Ok(Column::Float64(Self::from_options(values)))
    }
}
