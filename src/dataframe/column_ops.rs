//! Column-level operations: add, remove, rename, lookup

use log::info;

use super::core::DataFrame;
use crate::column::{Column, ColumnType, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};

impl DataFrame {
    /// Appends a column. The first column fixes the row count.
    pub fn add_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column_indices.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        let column_len = column.len();
        if !self.columns.is_empty() && column_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column_len,
            });
        }

        let column_idx = self.columns.len();
        self.columns.push(column);
        self.column_indices.insert(name.clone(), column_idx);
        self.column_names.push(name);

        if column_idx == 0 {
            self.row_count = column_len;
        }

        Ok(())
    }

    /// Adds the column, or replaces an existing one of the same name in place
    pub fn set_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        let column = column.into();

        match self.column_indices.get(&name) {
            Some(&idx) => {
                if column.len() != self.row_count {
                    return Err(Error::InconsistentRowCount {
                        expected: self.row_count,
                        found: column.len(),
                    });
                }
                self.columns[idx] = column;
                Ok(())
            }
            None => self.add_column(name, column),
        }
    }

    pub fn add_int_column(&mut self, name: impl Into<String>, data: Vec<i64>) -> Result<()> {
        self.add_column(name, Int64Column::new(data))
    }

    pub fn add_float_column(&mut self, name: impl Into<String>, data: Vec<f64>) -> Result<()> {
        self.add_column(name, Float64Column::new(data))
    }

    pub fn add_string_column(&mut self, name: impl Into<String>, data: Vec<String>) -> Result<()> {
        self.add_column(name, StringColumn::new(data))
    }

    pub fn remove_column(&mut self, name: &str) -> Result<Column> {
        let column_idx = *self
            .column_indices
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;

        let removed = self.columns.remove(column_idx);
        self.column_names.remove(column_idx);
        self.reindex();

        if self.columns.is_empty() {
            self.row_count = 0;
        }

        Ok(removed)
    }

    /// Drops every listed column that exists; absent names are skipped.
    /// Returns the names actually dropped.
    pub fn drop_columns(&mut self, names: &[&str]) -> Vec<String> {
        let mut dropped = Vec::new();
        for &name in names {
            if self.remove_column(name).is_ok() {
                dropped.push(name.to_string());
            }
        }

        if !dropped.is_empty() {
            info!("dropped columns: {}", dropped.join(", "));
        }
        dropped
    }

    pub fn rename_column(&mut self, old_name: &str, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();

        if old_name != new_name && self.column_indices.contains_key(&new_name) {
            return Err(Error::DuplicateColumnName(new_name));
        }

        let column_idx = *self
            .column_indices
            .get(old_name)
            .ok_or_else(|| Error::ColumnNotFound(old_name.to_string()))?;

        self.column_indices.remove(old_name);
        self.column_indices.insert(new_name.clone(), column_idx);
        self.column_names[column_idx] = new_name;

        Ok(())
    }

    /// Applies `(from, to)` renames in order, skipping absent source columns.
    /// Returns the number of columns renamed.
    ///
    /// Either every rename is applied or, on error, the frame is left as it was.
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) -> Result<usize> {
        let mut names = self.column_names.clone();
        let mut renamed = 0;
        for &(from, to) in renames {
            let Some(idx) = names.iter().position(|name| name == from) else {
                continue;
            };
            if from != to && names.iter().any(|name| name == to) {
                return Err(Error::DuplicateColumnName(to.to_string()));
            }
            names[idx] = to.to_string();
            renamed += 1;
        }

        for (old, new) in self.column_names.iter().zip(&names) {
            if old != new {
                info!("renamed column '{}' to '{}'", old, new);
            }
        }
        self.column_names = names;
        self.reindex();
        Ok(renamed)
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_indices.contains_key(name)
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.column_indices.get(name).map(|&idx| &self.columns[idx])
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.get_column(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    pub fn column_type(&self, name: &str) -> Result<ColumnType> {
        self.column(name).map(Column::column_type)
    }

    /// Non-missing values of a numeric column, as `f64`
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)?.numeric_values(name)
    }
}
