//! Per-run session context: form values, location options, the result
//! view state machine, and the user-facing notice.
//!
//! A [`Session`] is created once per run with [`Session::start`], which
//! performs the one-shot location load before anything is drawn. All
//! later mutation goes through `&mut self`, so at most one prediction can
//! be pending at a time.

mod error;
mod locations;
mod presenter;

pub use error::PredictError;
pub use locations::LocationSet;
pub use presenter::{Presenter, ViewState};

use log::{debug, error, info};

use crate::api::EstimatorApi;
use crate::model::{Field, FormInput, PredictionResult, validate_form};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message for the user, shown until the next prediction or reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// State owned by one run of the estimator.
pub struct Session<A> {
    api: A,
    form: FormInput,
    locations: LocationSet,
    presenter: Presenter,
    notice: Option<Notice>,
}

impl<A: EstimatorApi> Session<A> {
    /// Creates a session and loads the location options once.
    ///
    /// A failed load is logged and leaves the option list empty; the
    /// session is still usable.
    pub async fn start(api: A) -> Self {
        let mut session = Self {
            api,
            form: FormInput::default(),
            locations: LocationSet::default(),
            presenter: Presenter::default(),
            notice: None,
        };
        session.load_locations().await;
        session
    }

    async fn load_locations(&mut self) {
        match LocationSet::load(&self.api).await {
            Ok(locations) => {
                info!("loaded {} locations", locations.len());
                if locations.is_empty() {
                    self.notice = Some(Notice::info("The backend offered no locations."));
                }
                self.locations = locations;
                self.form.apply_default_location(self.locations.as_slice());
            }
            Err(e) => {
                error!("Error loading locations: {e}");
                self.notice = Some(Notice::error(
                    "Could not load locations from the backend.",
                ));
            }
        }
    }

    /// Validates the form and requests an estimate.
    ///
    /// Validation failures never reach the network. On a backend failure
    /// the view state and any previous result are left as they were.
    pub async fn predict(&mut self) -> Result<&PredictionResult, PredictError> {
        if let Err(e) = validate_form(&self.form) {
            debug!("prediction rejected: {e}");
            self.notice = Some(Notice::error(e.to_string()));
            return Err(e.into());
        }

        debug!("requesting prediction for {:?}", self.form);
        let estimate = match self.api.predict(&self.form).await {
            Ok(estimate) => estimate,
            Err(e) => {
                error!("Prediction error: {e}");
                let err = PredictError::from(e);
                self.notice = Some(Notice::error(err.user_message()));
                return Err(err);
            }
        };

        let result = PredictionResult::from(&estimate);
        info!(
            "predicted price {} (confidence {}%)",
            result.price, result.confidence
        );
        self.notice = None;
        Ok(self.presenter.show_results(result))
    }
}

impl<A> Session<A> {
    /// Replaces one form field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Clears the form and the result, returning to the input prompt.
    pub fn reset(&mut self) {
        self.form.reset(self.locations.as_slice());
        self.presenter.reset();
        self.notice = None;
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn view_state(&self) -> ViewState {
        self.presenter.view_state()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.presenter.result()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use crate::api::{ApiError, EstimatorApi};
    use crate::model::{Estimate, EstimateRange, FormInput};

    /// Scripted [`EstimatorApi`] that records how it was called.
    #[derive(Debug, Default)]
    pub struct FakeApi {
        /// `None` makes the location fetch fail.
        pub locations: Option<Vec<String>>,
        /// `None` makes the prediction fail.
        pub estimate: Option<Estimate>,
        pub location_calls: Cell<usize>,
        pub predict_calls: Cell<usize>,
        pub last_input: RefCell<Option<FormInput>>,
    }

    impl FakeApi {
        pub fn with_locations(locations: &[&str]) -> Self {
            Self {
                locations: Some(locations.iter().map(|s| s.to_string()).collect()),
                ..Self::default()
            }
        }

        pub fn estimate(mut self, estimate: Estimate) -> Self {
            self.estimate = Some(estimate);
            self
        }
    }

    fn unavailable(path: &str) -> ApiError {
        ApiError::Status {
            url: format!("http://fake/{path}"),
            status: 503,
            message: "unavailable".into(),
        }
    }

    impl EstimatorApi for FakeApi {
        fn base_url(&self) -> &str {
            "http://fake"
        }

        async fn locations(&self) -> Result<Vec<String>, ApiError> {
            self.location_calls.set(self.location_calls.get() + 1);
            self.locations.clone().ok_or_else(|| unavailable("locations"))
        }

        async fn predict(&self, input: &FormInput) -> Result<Estimate, ApiError> {
            self.predict_calls.set(self.predict_calls.get() + 1);
            *self.last_input.borrow_mut() = Some(input.clone());
            self.estimate.ok_or_else(|| unavailable("predict"))
        }
    }

    pub fn sample_estimate() -> Estimate {
        Estimate {
            price: 7850000.4,
            confidence: 91.23,
            r2_score: 0.8734,
            mse: 152345.7,
            price_range: EstimateRange {
                low: 7200000.0,
                high: 8500000.0,
            },
        }
    }
}
