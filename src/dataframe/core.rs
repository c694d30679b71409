//! Core DataFrame structure and display

use std::collections::HashMap;
use std::fmt;

use crate::column::Column;

/// Column-oriented table of named, typed columns of equal length.
///
/// Column order and row order are both significant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    pub(crate) columns: Vec<Column>,
    // name -> position in `columns`
    pub(crate) column_indices: HashMap<String, usize>,
    pub(crate) column_names: Vec<String>,
    pub(crate) row_count: usize,
}

impl DataFrame {
    /// Creates an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Iterates `(name, column)` pairs in column order
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &Column)> + '_ {
        self.column_names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Rebuilds the name index after `column_names` changed
    pub(crate) fn reindex(&mut self) {
        self.column_indices = self
            .column_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        if self.columns.is_empty() {
            return write!(f, "DataFrame (0 rows x 0 columns)");
        }

        writeln!(
            f,
            "DataFrame ({} rows x {} columns):",
            self.row_count,
            self.columns.len()
        )?;

        write!(f, "{:<5} |", "idx")?;
        for name in &self.column_names {
            write!(f, " {:<15} |", name)?;
        }
        writeln!(f)?;

        write!(f, "{:-<5}-+", "")?;
        for _ in &self.column_names {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        let display_rows = self.row_count.min(MAX_ROWS);
        for i in 0..display_rows {
            write!(f, "{:<5} |", i)?;
            for col in &self.columns {
                let value = col.format_value(i).unwrap_or_else(|| "NA".to_string());
                write!(f, " {:<15} |", value)?;
            }
            writeln!(f)?;
        }

        if self.row_count > MAX_ROWS {
            writeln!(f, "... ({} more rows)", self.row_count - MAX_ROWS)?;
        }

        Ok(())
    }
}
