//! Summary statistics over DataFrame columns

use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde::Serialize;

use super::core::DataFrame;
use crate::column::{Column, ColumnType};
use crate::error::{Error, Result, Warning};
use crate::stats::{self, SummaryStats};

/// Summaries of several columns, plus warnings for the ones that were absent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub columns: Vec<(String, SummaryStats)>,
    #[serde(skip)]
    pub warnings: Vec<Warning>,
}

/// One column of [`DataFrame::describe`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescription {
    pub name: String,
    pub column_type: ColumnType,
    pub non_null: usize,
    pub nulls: usize,
    /// Numeric columns with at least one value
    pub stats: Option<SummaryStats>,
    /// Distinct non-missing labels of a text column
    pub distinct: Option<usize>,
}

impl fmt::Display for ColumnDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<8} non-null {:>6} null {:>6}",
            self.name, self.column_type, self.non_null, self.nulls
        )?;
        if let Some(stats) = &self.stats {
            write!(
                f,
                "  mean {:.2} median {:.2} p5 {:.2} p95 {:.2}",
                stats.mean, stats.median, stats.p5, stats.p95
            )?;
        }
        if let Some(distinct) = self.distinct {
            write!(f, "  distinct {}", distinct)?;
        }
        Ok(())
    }
}

impl DataFrame {
    /// Count, mean, median, p5 and p95 of a numeric column.
    /// Fails with `EmptyColumn` when the column has no non-missing values.
    pub fn summarize(&self, column: &str) -> Result<SummaryStats> {
        let values = self.numeric_values(column)?;
        if values.is_empty() {
            return Err(Error::EmptyColumn(column.to_string()));
        }
        stats::summarize(&values)
    }

    /// Summarizes each listed column, skipping absent ones with a warning
    pub fn summarize_columns(&self, columns: &[&str]) -> Result<SummaryReport> {
        let mut report = SummaryReport {
            columns: Vec::new(),
            warnings: Vec::new(),
        };

        for &name in columns {
            if !self.contains_column(name) {
                warn!("column '{}' not found, summary skipped", name);
                report.warnings.push(Warning::ColumnNotFound(name.to_string()));
                continue;
            }
            report.columns.push((name.to_string(), self.summarize(name)?));
        }

        Ok(report)
    }

    /// Describes every column: type, null counts, and statistics or
    /// distinct-label counts depending on the type
    pub fn describe(&self) -> Vec<ColumnDescription> {
        self.iter_columns()
            .map(|(name, column)| {
                let nulls = column.null_count();
                let (stats, distinct) = match column {
                    Column::String(col) => {
                        let labels: HashSet<&str> = col.iter().flatten().collect();
                        (None, Some(labels.len()))
                    }
                    numeric => {
                        let stats = numeric
                            .numeric_values(name)
                            .ok()
                            .filter(|values| !values.is_empty())
                            .and_then(|values| stats::summarize(&values).ok());
                        (stats, None)
                    }
                };

                ColumnDescription {
                    name: name.to_string(),
                    column_type: column.column_type(),
                    non_null: column.len() - nulls,
                    nulls,
                    stats,
                    distinct,
                }
            })
            .collect()
    }
}
