//! Percentile-based outlier filtering.
//!
//! Bounds are recomputed from the current frame on every call, so filtering
//! the result again can narrow it further. Use [`DataFrame::filter_within`]
//! with the bounds of an earlier run to re-apply a fixed range.

use log::{info, warn};

use super::core::DataFrame;
use super::outcome::Transformed;
use crate::error::{Error, Result, Warning};
use crate::stats::{self, Bounds};

pub const DEFAULT_OUTLIER_COLUMN: &str = "Year";
pub const DEFAULT_LOWER_PERCENTILE: f64 = 5.0;
pub const DEFAULT_UPPER_PERCENTILE: f64 = 95.0;

/// Bounds used by an outlier filter and how many rows fell outside them
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    pub column: String,
    pub bounds: Bounds,
    pub removed: usize,
}

impl DataFrame {
    /// Keeps rows whose `column` value lies within the `p_low`/`p_high`
    /// percentile bounds of that column, both ends inclusive.
    ///
    /// Rows missing a value in `column` are dropped. A missing column is a
    /// no-op reported as [`Warning::ColumnNotFound`].
    pub fn filter_outliers(
        &self,
        column: &str,
        p_low: f64,
        p_high: f64,
    ) -> Result<Transformed<OutlierReport>> {
        let Some(col) = self.get_column(column) else {
            warn!("column '{}' not found, outlier filter skipped", column);
            return Ok(Transformed::skipped(
                self.clone(),
                Warning::ColumnNotFound(column.to_string()),
            ));
        };

        let values = col.numeric_values(column)?;
        if values.is_empty() {
            return Err(Error::EmptyColumn(column.to_string()));
        }

        let bounds = stats::percentile_bounds(&values, p_low, p_high)?;
        let (frame, report) = self.apply_bounds(column, bounds)?;
        info!(
            "removed {} outliers outside {} for '{}'",
            report.removed, bounds, column
        );
        Ok(Transformed::applied(frame, report))
    }

    /// Filters the default column (`Year`) at the 5th/95th percentiles
    pub fn drop_outliers(&self) -> Result<Transformed<OutlierReport>> {
        self.filter_outliers(
            DEFAULT_OUTLIER_COLUMN,
            DEFAULT_LOWER_PERCENTILE,
            DEFAULT_UPPER_PERCENTILE,
        )
    }

    /// Keeps rows whose `column` value lies within fixed `bounds`, both ends
    /// inclusive. Applying the same bounds twice leaves the frame unchanged.
    pub fn filter_within(&self, column: &str, bounds: Bounds) -> Result<Transformed<OutlierReport>> {
        if !self.contains_column(column) {
            warn!("column '{}' not found, range filter skipped", column);
            return Ok(Transformed::skipped(
                self.clone(),
                Warning::ColumnNotFound(column.to_string()),
            ));
        }
        let (frame, report) = self.apply_bounds(column, bounds)?;
        Ok(Transformed::applied(frame, report))
    }

    fn apply_bounds(&self, column: &str, bounds: Bounds) -> Result<(DataFrame, OutlierReport)> {
        let mask: Vec<bool> = self
            .column(column)?
            .numeric_options(column)?
            .into_iter()
            .map(|value| value.map_or(false, |v| bounds.contains(v)))
            .collect();

        let frame = self.select_by_mask(&mask)?;
        let removed = self.row_count - frame.row_count;
        Ok((
            frame,
            OutlierReport {
                column: column.to_string(),
                bounds,
                removed,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Float64Column, StringColumn};

    fn years() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_int_column("Year", vec![1990, 1995, 2000, 2005, 2010, 2015, 2020])
            .unwrap();
        df.add_string_column(
            "Model",
            ["a", "b", "c", "d", "e", "f", "g"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        df
    }

    #[test]
    fn test_drop_outliers_keeps_inner_rows_in_order() {
        let result = years().drop_outliers().unwrap();
        let report = result.report().unwrap();
        assert!((report.bounds.lower - 1991.5).abs() < 1e-9);
        assert!((report.bounds.upper - 2018.5).abs() < 1e-9);
        assert_eq!(report.removed, 2);

        assert_eq!(
            result.frame.numeric_values("Year").unwrap(),
            vec![1995.0, 2000.0, 2005.0, 2010.0, 2015.0]
        );
        let models: Vec<_> = result
            .frame
            .column("Model")
            .unwrap()
            .as_string()
            .unwrap()
            .iter()
            .map(|v| v.unwrap().to_string())
            .collect();
        assert_eq!(models, vec!["b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_missing_column_is_noop() {
        let mut df = DataFrame::new();
        df.add_int_column("Price", vec![1, 2, 3]).unwrap();
        let result = df.drop_outliers().unwrap();
        assert_eq!(result.frame, df);
        assert_eq!(
            result.warning(),
            Some(&Warning::ColumnNotFound("Year".to_string()))
        );
        assert!(result.report().is_none());
    }

    #[test]
    fn test_missing_values_dropped() {
        let mut df = DataFrame::new();
        df.add_column(
            "Year",
            Float64Column::from_options(vec![Some(1.0), None, Some(2.0), Some(3.0)]),
        )
        .unwrap();
        let result = df.filter_outliers("Year", 0.0, 100.0).unwrap();
        assert_eq!(result.frame.row_count(), 3);
        assert_eq!(result.report().unwrap().removed, 1);
    }

    #[test]
    fn test_empty_and_text_columns() {
        let mut df = DataFrame::new();
        df.add_column("Year", Float64Column::from_options(vec![None, None]))
            .unwrap();
        assert!(matches!(df.drop_outliers(), Err(Error::EmptyColumn(_))));

        let mut df = DataFrame::new();
        df.add_column("Year", StringColumn::new(vec!["old".into()]))
            .unwrap();
        assert!(matches!(
            df.drop_outliers(),
            Err(Error::ColumnTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_constant_column_keeps_everything() {
        let mut df = DataFrame::new();
        df.add_int_column("Year", vec![2000; 4]).unwrap();
        let result = df.drop_outliers().unwrap();
        let report = result.report().unwrap();
        assert_eq!(report.bounds.lower, report.bounds.upper);
        assert_eq!(result.frame.row_count(), 4);
    }

    #[test]
    fn test_fixed_bounds_are_idempotent() {
        let first = years().drop_outliers().unwrap();
        let bounds = first.report().unwrap().bounds;

        let again = first.frame.filter_within("Year", bounds).unwrap();
        assert_eq!(again.frame, first.frame);
        assert_eq!(again.report().unwrap().removed, 0);
    }

    #[test]
    fn test_recomputed_bounds_narrow() {
        let first = years().drop_outliers().unwrap().into_frame();
        let second = first.drop_outliers().unwrap();
        // bounds over 1995..=2015 are 1996–2014
        assert_eq!(second.frame.row_count(), 3);
    }
}
