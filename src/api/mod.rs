//! HTTP access to the prediction service.
//!
//! Two endpoints are consumed: `GET /locations` for the location options
//! and `POST /predict` for an estimate. [`EstimatorApi`] is the seam the
//! session talks through; [`HttpEstimator`] is the real implementation.

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, HttpEstimator};
pub use error::ApiError;

use crate::model::{Estimate, FormInput};

/// Operations the session needs from the prediction service.
#[allow(async_fn_in_trait)]
pub trait EstimatorApi {
    /// Address requests are sent to, for display.
    fn base_url(&self) -> &str;

    /// Fetches the valid location options, in display order.
    async fn locations(&self) -> Result<Vec<String>, ApiError>;

    /// Requests a price estimate for the given form values.
    async fn predict(&self, input: &FormInput) -> Result<Estimate, ApiError>;
}
