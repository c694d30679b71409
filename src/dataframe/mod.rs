//! Column-oriented DataFrame and the cleaning operations over it

pub mod categorical;
pub mod column_ops;
pub mod core;
pub mod outcome;
pub mod outlier;
pub mod row_ops;
pub mod summary;

pub use self::categorical::{DEFAULT_FACTORIZE_SOURCE, DEFAULT_FACTORIZE_TARGET};
pub use self::core::DataFrame;
pub use self::outcome::{Outcome, Transformed};
pub use self::outlier::{
    OutlierReport, DEFAULT_LOWER_PERCENTILE, DEFAULT_OUTLIER_COLUMN, DEFAULT_UPPER_PERCENTILE,
};
pub use self::summary::{ColumnDescription, SummaryReport};
