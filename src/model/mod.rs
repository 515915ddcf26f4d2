mod form;
mod format;
mod prediction;
mod validation;

pub use form::{Field, FormInput, UnknownField};
pub use format::{group_indian, to_fixed};
pub use prediction::{Estimate, EstimateRange, PredictionResult, PriceRange};
pub use validation::{
    ValidationError, field_errors, validate_count, validate_form, validate_sqft,
};
