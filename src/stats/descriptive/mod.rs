use log::debug;

use crate::error::{Error, Result};
use crate::stats::{Bounds, SummaryStats};

const EMPTY_INPUT: &str = "percentile input";

fn validate_range(low: f64, high: f64) -> Result<()> {
    let in_range = |p: f64| (0.0..=100.0).contains(&p);
    if in_range(low) && in_range(high) && low <= high {
        Ok(())
    } else {
        Err(Error::InvalidPercentile { low, high })
    }
}

/// Drops NaN values and sorts the rest ascending
fn sorted_values(data: &[f64]) -> Result<Vec<f64>> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    if sorted.is_empty() {
        return Err(Error::EmptyColumn(EMPTY_INPUT.into()));
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Linear interpolation at rank `p / 100 * (n - 1)`. `sorted_data` must be
/// non-empty and ascending, `p` within `[0, 100]`.
pub(crate) fn percentile_sorted(sorted_data: &[f64], p: f64) -> f64 {
    let last = sorted_data.len() - 1;
    let rank = p / 100.0 * last as f64;
    let idx_floor = (rank.floor() as usize).min(last);
    let idx_ceil = (rank.ceil() as usize).min(last);

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let fraction = rank - idx_floor as f64;
    let low = sorted_data[idx_floor];
    let high = sorted_data[idx_ceil];
    if low == high {
        return low;
    }
    // -inf next to +inf has no interpolated value; take the nearer neighbour
    if low.is_infinite() && high.is_infinite() {
        return if fraction < 0.5 { low } else { high };
    }
    low + (high - low) * fraction
}

pub(crate) fn percentile_impl(data: &[f64], p: f64) -> Result<f64> {
    validate_range(p, p)?;
    let sorted = sorted_values(data)?;
    Ok(percentile_sorted(&sorted, p))
}

pub(crate) fn percentile_bounds_impl(data: &[f64], p_low: f64, p_high: f64) -> Result<Bounds> {
    validate_range(p_low, p_high)?;
    let sorted = sorted_values(data)?;

    let bounds = Bounds {
        lower: percentile_sorted(&sorted, p_low),
        upper: percentile_sorted(&sorted, p_high),
    };
    debug!(
        "percentile bounds p{}={} p{}={} over {} values",
        p_low,
        bounds.lower,
        p_high,
        bounds.upper,
        sorted.len()
    );
    Ok(bounds)
}

pub(crate) fn summarize_impl(data: &[f64]) -> Result<SummaryStats> {
    let sorted = sorted_values(data)?;
    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;

    Ok(SummaryStats {
        count,
        mean,
        median: percentile_sorted(&sorted, 50.0),
        p5: percentile_sorted(&sorted, 5.0),
        p95: percentile_sorted(&sorted, 95.0),
    })
}
