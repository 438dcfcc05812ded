//! Descriptive statistics over score columns and rows
//!
//! Mirrors the usual `describe()` summary: count, mean, sample standard
//! deviation, min, quartiles and max. Uses trueno::Vector for the moments and
//! aprender's DescriptiveStats (R-7 quantiles) for the quartiles.
//!
//! Min and max are taken from the `f64` scores, so they print exactly like the
//! score cells. Mean, standard deviation and quartiles are computed in `f32`
//! and carry about seven significant digits; they are clamped into
//! `[min, max]` so rounding never puts them outside the observed range.

use anyhow::{Context, Result};
use aprender::stats::DescriptiveStats;
use trueno::Vector;

/// Column names of a summary row, after the label
pub const SUMMARY_HEADERS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary of one set of scores
///
/// Statistics are `None` when undefined: everything for an empty set, the
/// standard deviation for a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub label: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            count: 0,
            mean: None,
            std: None,
            min: None,
            q25: None,
            q50: None,
            q75: None,
            max: None,
        }
    }

    /// Statistics in [`SUMMARY_HEADERS`] order, count excluded
    pub fn values(&self) -> [Option<f64>; 7] {
        [
            self.mean, self.std, self.min, self.q25, self.q50, self.q75, self.max,
        ]
    }
}

/// Summarize a set of scores
pub fn describe(label: &str, values: &[f64]) -> Result<Summary> {
    if values.is_empty() {
        return Ok(Summary::empty(label));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let within_range = |v: f32| f64::from(v).clamp(min, max);

    let samples: Vec<f32> = values.iter().map(|&v| v as f32).collect();
    let vector = Vector::from_slice(&samples);
    let n = samples.len();

    let mean = vector.mean().context("Failed to compute mean")?;

    // trueno reports the population variance; rescale to the sample variance.
    // Identical scores can leave a tiny negative residue in f32.
    let std = if n > 1 {
        let variance = vector
            .variance()
            .context("Failed to compute variance")?
            .max(0.0);
        Some(f64::from(variance * n as f32 / (n - 1) as f32).sqrt())
    } else {
        None
    };

    let stats = DescriptiveStats::new(&vector);
    let q25 = stats
        .quantile(0.25)
        .map_err(|e| anyhow::anyhow!("Failed to compute 25% quantile: {}", e))?;
    let q50 = stats
        .quantile(0.5)
        .map_err(|e| anyhow::anyhow!("Failed to compute median: {}", e))?;
    let q75 = stats
        .quantile(0.75)
        .map_err(|e| anyhow::anyhow!("Failed to compute 75% quantile: {}", e))?;

    Ok(Summary {
        label: label.to_string(),
        count: n,
        mean: Some(within_range(mean)),
        std,
        min: Some(min),
        q25: Some(within_range(q25)),
        q50: Some(within_range(q50)),
        q75: Some(within_range(q75)),
        max: Some(max),
    })
}
