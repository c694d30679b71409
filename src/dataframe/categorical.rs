//! Factorizing a column into dense integer ids

use log::{info, warn};

use super::core::DataFrame;
use super::outcome::Transformed;
use crate::categorical::{self, FactorizationMap};
use crate::column::{Column, Int64Column};
use crate::error::{Result, Warning};

pub const DEFAULT_FACTORIZE_SOURCE: &str = "Brand";
pub const DEFAULT_FACTORIZE_TARGET: &str = "Brand_ID";

impl DataFrame {
    /// Adds `target` as an `Int64` column holding the first-occurrence id of
    /// each `source` label. An existing `target` column is replaced.
    ///
    /// Numeric columns are factorized by the text rendering of each value.
    ///
    /// A missing `source` column is a no-op reported as
    /// [`Warning::ColumnNotFound`].
    pub fn factorize_column(&self, source: &str, target: &str) -> Result<Transformed<FactorizationMap>> {
        let Some(column) = self.get_column(source) else {
            warn!("column '{}' not found, factorization skipped", source);
            return Ok(Transformed::skipped(
                self.clone(),
                Warning::ColumnNotFound(source.to_string()),
            ));
        };

        let result = match column {
            Column::String(labels) => categorical::factorize(labels.iter()),
            numeric => {
                let labels: Vec<Option<String>> =
                    (0..numeric.len()).map(|i| numeric.format_value(i)).collect();
                categorical::factorize(labels.iter().map(Option::as_deref))
            }
        };

        let mut frame = self.clone();
        frame.set_column(target, Int64Column::new(result.codes))?;
        info!(
            "converted '{}' to {} numeric ids in '{}'",
            source,
            result.mapping.len(),
            target
        );

        Ok(Transformed::applied(frame, result.mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::StringColumn;

    fn brands(values: &[&str]) -> DataFrame {
        let mut df = DataFrame::new();
        df.add_string_column("Brand", values.iter().map(|s| s.to_string()).collect())
            .unwrap();
        df
    }

    #[test]
    fn test_factorize_column() {
        let df = brands(&["BMW", "Audi", "BMW", "Kia"]);
        let result = df
            .factorize_column(DEFAULT_FACTORIZE_SOURCE, DEFAULT_FACTORIZE_TARGET)
            .unwrap();

        assert_eq!(
            result.frame.numeric_values("Brand_ID").unwrap(),
            vec![0.0, 1.0, 0.0, 2.0]
        );
        assert_eq!(result.report().unwrap().get(Some("Kia")), Some(2));
        // the input frame is untouched
        assert!(!df.contains_column("Brand_ID"));
    }

    #[test]
    fn test_refactorize_replaces_target() {
        let df = brands(&["A", "B"]);
        let once = df.factorize_column("Brand", "Brand_ID").unwrap().into_frame();
        let twice = once.factorize_column("Brand", "Brand_ID").unwrap().into_frame();
        assert_eq!(once, twice);
        assert_eq!(twice.column_count(), 2);
    }

    #[test]
    fn test_missing_labels() {
        let mut df = DataFrame::new();
        df.add_column(
            "Brand",
            StringColumn::from_options(vec![None, Some("A".into()), None]),
        )
        .unwrap();
        let result = df.factorize_column("Brand", "Brand_ID").unwrap();
        assert_eq!(
            result.frame.numeric_values("Brand_ID").unwrap(),
            vec![0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn test_missing_source() {
        let df = brands(&["A"]);
        let result = df.factorize_column("Make", "Make_ID").unwrap();
        assert_eq!(result.frame, df);
        assert_eq!(
            result.warning(),
            Some(&Warning::ColumnNotFound("Make".to_string()))
        );
    }

    #[test]
    fn test_numeric_source() {
        let mut df = DataFrame::new();
        df.add_column(
            "Year",
            Int64Column::from_options(vec![Some(2011), None, Some(2009), Some(2011)]),
        )
        .unwrap();

        let result = df.factorize_column("Year", "Year_ID").unwrap();
        assert_eq!(
            result.frame.numeric_values("Year_ID").unwrap(),
            vec![0.0, 1.0, 2.0, 0.0]
        );
        let mapping = result.report().unwrap();
        assert_eq!(mapping.get(Some("2009")), Some(2));
        assert_eq!(mapping.get(None), Some(1));
    }
}
