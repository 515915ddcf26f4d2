use crate::api::ApiError;
use crate::model::ValidationError;

/// Why a prediction did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The form is incomplete or holds non-numeric values; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request was sent but no usable estimate came back.
    #[error("prediction failed: {0}")]
    Backend(#[from] ApiError),
}

impl PredictError {
    /// Message shown to the user in place of the technical cause.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Backend(_) => "Backend error. Check the log for details.".to_string(),
        }
    }
}
