use std::sync::Arc;

use crate::column::common::{utils, Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of 64-bit integers
#[derive(Debug, Clone, PartialEq)]
pub struct Int64Column {
    pub(crate) data: Arc<[i64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl Int64Column {
    pub fn new(data: Vec<i64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Creates a column where `nulls[i] == true` marks row `i` as missing
    pub fn with_nulls(data: Vec<i64>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
        }
    }

    pub fn from_options(values: Vec<Option<i64>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data: Vec<i64> = values.into_iter().map(|v| v.unwrap_or_default()).collect();
        Self::with_nulls(data, nulls)
    }

    pub fn get(&self, index: usize) -> Result<Option<i64>> {
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
    pub fn iter(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        (0..self.data.len()).map(move |i| {
            if self.is_null(i) {
                None
            } else {
                Some(self.data[i])
            }
        })
    }
}

impl ColumnTrait for Int64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Int64
    }

    fn is_null(&self, index: usize) -> bool {
        match &self.null_mask {
            None => index >= self.data.len(),
            Some(mask) => index >= self.data.len() || utils::is_set(mask, index),
        }
    }

    fn take(&self, indices: &[usize]) -> Result<Column> {
        utils::check_indices(indices, self.data.len())?;
        let values = indices
            .iter()
            .map(|&i| if self.is_null(i) { None } else { Some(self.data[i]) })
            .collect();
        Ok(Column::Int64(Self::from_options(values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_with_nulls() {
        let col = Int64Column::with_nulls(vec![1, 0, 3], vec![false, true, false]);
        assert_eq!(col.get(0).unwrap(), Some(1));
        assert_eq!(col.get(1).unwrap(), None);
        assert!(col.get(3).is_err());
        assert_eq!(col.null_count(), 1);
    }

    #[test]
    fn test_take_keeps_nulls() {
        let col = Int64Column::from_options(vec![Some(5), None, Some(7)]);
        let taken = col.take(&[2, 1]).unwrap();
        let taken = taken.as_int64().unwrap();
        assert_eq!(taken.iter().collect::<Vec<_>>(), vec![Some(7), None]);
        assert!(col.take(&[3]).is_err());
    }
}
