use serde::Serialize;

/// Box-plot statistics over a flat series of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    /// `q1 - 1.5 * iqr`, not clamped to the data.
    pub lower_whisker: f64,
    /// `q3 + 1.5 * iqr`, not clamped to the data.
    pub upper_whisker: f64,
    pub min: f64,
    pub max: f64,
    pub outliers: Vec<f64>,
    pub non_outliers: Vec<f64>,
}

impl DistributionSummary {
    /// Ends of the drawn whiskers: the extreme values still inside the fences.
    pub fn whisker_extent(&self) -> Option<(f64, f64)> {
        let low = self.non_outliers.iter().copied().reduce(f64::min)?;
        let high = self.non_outliers.iter().copied().reduce(f64::max)?;
        Some((low, high))
    }
}
