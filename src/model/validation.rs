use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::form::{Field, FormInput};

/// Reasons a form cannot be submitted for prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    Incomplete { missing: Vec<Field> },
    #[error("{} must be a positive number, got {value:?}", field.label())]
    NotANumber { field: Field, value: String },
    #[error("{} must be a positive whole number, got {value:?}", field.label())]
    NotAWholeNumber { field: Field, value: String },
}

impl ValidationError {
    /// Returns the form fields this error refers to.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::Incomplete { missing } => missing.clone(),
            Self::NotANumber { field, .. } | Self::NotAWholeNumber { field, .. } => vec![*field],
        }
    }
}

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)$").expect("valid hardcoded regex"));

static WHOLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid hardcoded regex"));

/// Parses a total area: a positive decimal such as `1200` or `1250.5`.
pub fn validate_sqft(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    DECIMAL_RE
        .is_match(trimmed)
        .then(|| trimmed.parse::<f64>().ok())
        .flatten()
        .filter(|sqft| sqft.is_finite() && *sqft > 0.0)
        .ok_or_else(|| ValidationError::NotANumber {
            field: Field::Sqft,
            value: value.to_string(),
        })
}

/// Parses a room count: a positive whole number.
pub fn validate_count(field: Field, value: &str) -> Result<u32, ValidationError> {
    let trimmed = value.trim();
    WHOLE_RE
        .is_match(trimmed)
        .then(|| trimmed.parse::<u32>().ok())
        .flatten()
        .filter(|count| *count > 0)
        .ok_or_else(|| ValidationError::NotAWholeNumber {
            field,
            value: value.to_string(),
        })
}

/// Returns every per-field problem at once, for marking the form.
///
/// Empty fields are reported as [`ValidationError::Incomplete`] with a
/// single missing field each.
pub fn field_errors(input: &FormInput) -> Vec<(Field, ValidationError)> {
    Field::all()
        .iter()
        .filter_map(|&field| {
            let value = input.get(field);
            let result = if value.is_empty() {
                Err(ValidationError::Incomplete {
                    missing: vec![field],
                })
            } else {
                match field {
                    Field::Sqft => validate_sqft(value).map(drop),
                    Field::Bedrooms | Field::Bathrooms => validate_count(field, value).map(drop),
                    Field::Location => Ok(()),
                }
            };
            result.err().map(|err| (field, err))
        })
        .collect()
}

/// Checks that a form may be sent to the backend.
///
/// Empty fields take precedence over malformed numbers: if anything is
/// missing the result is [`ValidationError::Incomplete`].
pub fn validate_form(input: &FormInput) -> Result<(), ValidationError> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::Incomplete { missing });
    }
    match field_errors(input).into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(()),
    }
}
