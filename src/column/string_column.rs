use std::sync::Arc;

use crate::column::common::{utils, Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of text values
#[derive(Debug, Clone, PartialEq)]
pub struct StringColumn {
    pub(crate) data: Arc<[String]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl StringColumn {
    pub fn new(data: Vec<String>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Creates a column where `nulls[i] == true` marks row `i` as missing
    pub fn with_nulls(data: Vec<String>, nulls: Vec<bool>) -> Self {
        Self {
            data: data.into(),
            null_mask: utils::optional_bitmask(&nulls),
        }
    }

    pub fn from_options(values: Vec<Option<String>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(Option::is_none).collect();
        let data: Vec<String> = values.into_iter().map(Option::unwrap_or_default).collect();
        Self::with_nulls(data, nulls)
    }

    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        Ok(Some(&self.data[index]))
    }

    /// Iterates values in row order, `None` for missing entries
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.data.len()).map(move |i| {
            if self.is_null(i) {
                None
            } else {
                Some(self.data[i].as_str())
            }
        })
    }
}

impl ColumnTrait for StringColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::String
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
            .map(|&i| {
                if self.is_null(i) {
                    None
                } else {
                    Some(self.data[i].clone())
                }
            })
            .collect();
        Ok(Column::String(Self::from_options(values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_iter() {
        let col = StringColumn::from_options(vec![Some("BMW".into()), None, Some("Audi".into())]);
        assert_eq!(col.get(0).unwrap(), Some("BMW"));
        assert_eq!(col.get(1).unwrap(), None);
        assert_eq!(
            col.iter().collect::<Vec<_>>(),
            vec![Some("BMW"), None, Some("Audi")]
        );
    }
}
