//! Typed column tables with percentile-based outlier filtering, summary
//! statistics, and first-occurrence factorization, plus the name-keyed
//! inventory used by the `fruit-inventory` tool.

pub mod app;
pub mod categorical;
pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod inventory;
pub mod io;
pub mod stats;

// Re-export commonly used types
pub use categorical::{factorize, Factorization, FactorizationMap};
pub use column::{Column, ColumnType};
pub use dataframe::{DataFrame, Outcome, OutlierReport, Transformed};
pub use error::{Error, Result, Warning};
pub use inventory::{Inventory, Item};
pub use stats::{percentile, percentile_bounds, summarize, Bounds, SummaryStats};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
