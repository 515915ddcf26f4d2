use serde::Deserialize;

use super::format::{group_indian, to_fixed};

/// Raw numeric estimate as returned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub price: f64,
    pub confidence: f64,
    pub r2_score: f64,
    pub mse: f64,
    pub price_range: EstimateRange,
}

/// Low/high bounds around the point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EstimateRange {
    pub low: f64,
    pub high: f64,
}

/// Display-ready price range, bounds rounded to whole rupees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRange {
    pub low: String,
    pub high: String,
}

/// A prediction normalized to its fixed display precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionResult {
    /// Whole rupees.
    pub price: String,
    /// Percentage, one decimal.
    pub confidence: String,
    /// Three decimals.
    pub r2_score: String,
    /// Whole units.
    pub mse: String,
    pub price_range: PriceRange,
}

impl From<&Estimate> for PredictionResult {
    fn from(estimate: &Estimate) -> Self {
        Self {
            price: to_fixed(estimate.price, 0),
            confidence: to_fixed(estimate.confidence, 1),
            r2_score: to_fixed(estimate.r2_score, 3),
            mse: to_fixed(estimate.mse, 0),
            price_range: PriceRange {
                low: to_fixed(estimate.price_range.low, 0),
                high: to_fixed(estimate.price_range.high, 0),
            },
        }
    }
}

impl PredictionResult {
    /// Price with rupee sign and Indian digit grouping, e.g. `₹78,50,000`.
    pub fn price_display(&self) -> String {
        format!("₹{}", group_indian(&self.price))
    }

    /// Range as `₹low – ₹high` with Indian digit grouping.
    pub fn range_display(&self) -> String {
        format!(
            "₹{} – ₹{}",
            group_indian(&self.price_range.low),
            group_indian(&self.price_range.high)
        )
    }

    /// Confidence with a percent sign.
    pub fn confidence_display(&self) -> String {
        format!("{}%", self.confidence)
    }
}
