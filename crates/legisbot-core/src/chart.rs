//! Chart input models for the admin statistics screens.

use serde::{Deserialize, Serialize};

/// One demographic or top-query bucket: `{group, count}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    pub group: String,
    pub count: f64,
}

/// One usage-per-day point: `{date, count}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub date: String,
    pub count: f64,
}

/// Display-ready series consumed by a chart renderer.
///
/// One independent instance per chart; derived per fetch and discarded on
/// refetch. Labels and values are parallel sequences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Builds a series from parallel (label, value) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, f64)>) -> Self {
        let mut series = Self::default();
        for (label, value) in pairs {
            series.labels.push(label);
            series.values.push(value);
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Largest value in the series, for bar scaling.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
