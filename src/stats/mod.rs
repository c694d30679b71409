//! Percentiles and summary statistics over numeric values.
//!
//! Percentiles use linear interpolation between order statistics: for a
//! percentile `p` over `n` sorted values the fractional rank is
//! `r = p / 100 * (n - 1)` (0-indexed). An integral rank selects that element;
//! otherwise the result is interpolated between `sorted[floor(r)]` and
//! `sorted[ceil(r)]` by the fractional part of `r`. This is the "linear"
//! method of NumPy (type 7 in Hyndman & Fan), not nearest-rank or midpoint.
//!
//! NaN inputs are treated as missing and ignored.

pub mod descriptive;

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Lower and upper percentile values, `lower <= upper`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}–{:.1}", self.lower, self.upper)
    }
}

/// Count, mean, median, and the 5th/95th percentiles of a column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of non-missing values
    pub count: usize,
    pub mean: f64,
    /// 50th percentile
    pub median: f64,
    pub p5: f64,
    pub p95: f64,
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Mean: {:.2}", self.mean)?;
        writeln!(f, "Median: {:.2}", self.median)?;
        writeln!(f, "5th percentile: {:.2}", self.p5)?;
        write!(f, "95th percentile: {:.2}", self.p95)
    }
}

/// Computes a single percentile with linear interpolation
///
/// # Example
/// ```rust
/// use tidyrs::stats;
///
/// let median = stats::percentile(&[10.0, 20.0, 30.0, 40.0, 50.0], 50.0).unwrap();
/// assert_eq!(median, 30.0);
/// ```
pub fn percentile<T: AsRef<[f64]>>(data: T, p: f64) -> Result<f64> {
    descriptive::percentile_impl(data.as_ref(), p)
}

/// Computes the `p_low` and `p_high` percentiles in one sort
///
/// # Example
/// ```rust
/// use tidyrs::stats;
///
/// let bounds = stats::percentile_bounds(&[10.0, 20.0, 30.0, 40.0, 50.0], 5.0, 95.0).unwrap();
/// assert!((bounds.lower - 12.0).abs() < 1e-9);
/// assert!((bounds.upper - 48.0).abs() < 1e-9);
/// ```
pub fn percentile_bounds<T: AsRef<[f64]>>(data: T, p_low: f64, p_high: f64) -> Result<Bounds> {
    descriptive::percentile_bounds_impl(data.as_ref(), p_low, p_high)
}

/// Computes [`SummaryStats`]. Fails with `EmptyColumn` when there are no values.
///
/// # Example
/// ```rust
/// use tidyrs::stats;
///
/// let summary = stats::summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.median, 2.5);
/// ```
pub fn summarize<T: AsRef<[f64]>>(data: T) -> Result<SummaryStats> {
    descriptive::summarize_impl(data.as_ref())
}
