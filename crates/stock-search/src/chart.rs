//! Chart data preparation and the renderer seam

use crate::series::PriceSeries;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Dataset label for the closing price line
pub const DATASET_LABEL: &str = "Stock Prices";

/// Parallel label/value sequences for a line chart.
///
/// `labels[i]` is the date for `values[i]`; both always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// Chart data for a series, or `None` when there is nothing to draw
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let (labels, values) = series
            .points()
            .iter()
            .map(|point| {
                (
                    point.date.format("%Y-%m-%d").to_string(),
                    point.closing_price.to_f64().unwrap_or(f64::NAN),
                )
            })
            .unzip();

        Some(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// External chart widget.
///
/// Called once per new non-empty series of the active search.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &ChartData);
}
