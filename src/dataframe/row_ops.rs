//! Row selection, missing-value removal, and concatenation

use log::info;

use super::core::DataFrame;
use crate::column::{Column, ColumnType};
use crate::error::{Error, Result};

impl DataFrame {
    /// Gathers the rows at `indices`, in that order, into a new DataFrame
    pub fn take_rows(&self, indices: &[usize]) -> Result<Self> {
        let mut result = Self::new();
        for (name, column) in self.iter_columns() {
            result.add_column(name, column.take(indices)?)?;
        }
        Ok(result)
    }

    /// Keeps the rows whose mask entry is `true`, preserving their order
    pub fn select_by_mask(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: mask.len(),
            });
        }

        let indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| keep.then_some(i))
            .collect();
        self.take_rows(&indices)
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Result<Self> {
        let n = n.min(self.row_count);
        let indices: Vec<usize> = (0..n).collect();
        self.take_rows(&indices)
    }

    /// Last `n` rows
    pub fn tail(&self, n: usize) -> Result<Self> {
        let start = self.row_count.saturating_sub(n);
        let indices: Vec<usize> = (start..self.row_count).collect();
        self.take_rows(&indices)
    }

    /// Removes every row holding a missing value in any column
    pub fn drop_na(&self) -> Result<Self> {
        let mask: Vec<bool> = (0..self.row_count)
            .map(|row| self.columns.iter().all(|col| !col.is_null(row)))
            .collect();
        let result = self.select_by_mask(&mask)?;

        info!(
            "dropped {} rows with missing values",
            self.row_count - result.row_count
        );
        Ok(result)
    }

    /// Stacks frames vertically.
    ///
    /// Columns are matched by name in order of first appearance. A column
    /// absent from one frame is filled with missing values for that frame's
    /// rows. `Int64` and `Float64` columns of the same name are combined as
    /// `Float64`; any other type clash is an error. A column that is
    /// entirely missing adopts the type of its counterparts.
    pub fn concat(frames: &[DataFrame]) -> Result<Self> {
        let mut names: Vec<&str> = Vec::new();
        for frame in frames {
            for name in frame.column_names() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }

        let mut result = Self::new();
        for name in names {
            let target = Self::concat_type(frames, name)?;

            let mut combined: Option<Column> = None;
            for frame in frames {
                let piece = match frame.get_column(name) {
                    Some(col) if col.null_count() == col.len() => Column::nulls(target, col.len()),
                    Some(col) if target == ColumnType::Float64 => col.to_float64(),
                    Some(col) => col.clone(),
                    None => Column::nulls(target, frame.row_count),
                };
                combined = Some(match combined {
                    None => piece,
                    Some(acc) => acc.append(&piece, name)?,
                });
            }

            if let Some(column) = combined {
                result.add_column(name, column)?;
            }
        }

        Ok(result)
    }

    fn concat_type(frames: &[DataFrame], name: &str) -> Result<ColumnType> {
        let mut target: Option<ColumnType> = None;
        for frame in frames {
            let Some(col) = frame.get_column(name) else {
                continue;
            };
            if !col.is_empty() && col.null_count() == col.len() {
                continue;
            }

            let found = col.column_type();
            target = Some(match target {
                None => found,
                Some(current) if current == found => current,
                Some(ColumnType::Int64) if found == ColumnType::Float64 => ColumnType::Float64,
                Some(ColumnType::Float64) if found == ColumnType::Int64 => ColumnType::Float64,
                Some(current) => {
                    return Err(Error::ColumnTypeMismatch {
                        name: name.to_string(),
                        expected: current,
                        found,
                    })
                }
            });
        }

        // Only all-missing columns: keep the first frame's type
        Ok(target.unwrap_or_else(|| {
            frames
                .iter()
                .find_map(|frame| frame.get_column(name))
                .map(Column::column_type)
                .unwrap_or(ColumnType::String)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Float64Column, Int64Column, StringColumn};

    fn frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column(
            "Brand",
            StringColumn::from_options(vec![Some("BMW".into()), None, Some("Audi".into())]),
        )
        .unwrap();
        df.add_column("Year", Int64Column::from_options(vec![Some(2011), Some(2012), None]))
            .unwrap();
        df
    }

    #[test]
    fn test_head_tail() {
        let df = frame();
        assert_eq!(df.head(2).unwrap().row_count(), 2);
        assert_eq!(df.head(10).unwrap().row_count(), 3);
        let tail = df.tail(1).unwrap();
        assert_eq!(tail.numeric_values("Year").unwrap(), Vec::<f64>::new());
        assert_eq!(tail.row_count(), 1);
    }

    #[test]
    fn test_drop_na() {
        let df = frame();
        let cleaned = df.drop_na().unwrap();
        assert_eq!(cleaned.row_count(), 1);
        assert_eq!(cleaned.numeric_values("Year").unwrap(), vec![2011.0]);
    }

    #[test]
    fn test_select_by_mask_length() {
        let df = frame();
        assert!(df.select_by_mask(&[true]).is_err());
        let none = df.select_by_mask(&[false, false, false]).unwrap();
        assert_eq!(none.shape(), (0, 2));
    }

    #[test]
    fn test_concat_unions_columns() {
        let a = frame();
        let mut b = DataFrame::new();
        b.add_column("Year", Float64Column::new(vec![2015.5])).unwrap();
        b.add_column("Price", Int64Column::new(vec![30000])).unwrap();

        let merged = DataFrame::concat(&[a, b]).unwrap();
        assert_eq!(merged.shape(), (4, 3));
        assert_eq!(merged.column_type("Year").unwrap(), ColumnType::Float64);
        assert_eq!(merged.column_type("Price").unwrap(), ColumnType::Int64);
        assert!(merged.column("Brand").unwrap().is_null(3));
        assert!(merged.column("Price").unwrap().is_null(0));
        assert_eq!(
            merged.numeric_values("Year").unwrap(),
            vec![2011.0, 2012.0, 2015.5]
        );
    }

    #[test]
    fn test_concat_type_clash() {
        let a = frame();
        let mut b = DataFrame::new();
        b.add_int_column("Brand", vec![1]).unwrap();
        assert!(matches!(
            DataFrame::concat(&[a, b]),
            Err(Error::ColumnTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_concat_all_missing_column_adopts_type() {
        let a = frame();
        let mut b = DataFrame::new();
        b.add_column("Year", StringColumn::from_options(vec![None])).unwrap();
        let merged = DataFrame::concat(&[a, b]).unwrap();
        assert_eq!(merged.column_type("Year").unwrap(), ColumnType::Int64);
        assert_eq!(merged.row_count(), 4);
    }
}
