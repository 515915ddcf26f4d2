use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// One of the four property attributes collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sqft,
    Bedrooms,
    Bathrooms,
    Location,
}

static ALL_FIELDS: &[Field] = &[
    Field::Sqft,
    Field::Bedrooms,
    Field::Bathrooms,
    Field::Location,
];

impl Field {
    /// Returns the JSON key used for this field in the `/predict` request body.
    pub fn name(self) -> &'static str {
        match self {
            Field::Sqft => "sqft",
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::Location => "location",
        }
    }

    /// Returns the human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Sqft => "Total Sqft",
            Field::Bedrooms => "Bedrooms (BHK)",
            Field::Bathrooms => "Bathrooms",
            Field::Location => "Location",
        }
    }

    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a field name does not match any form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Current values of the estimate form.
///
/// Values are kept exactly as typed; numeric checks happen at prediction
/// time. Serializes to the `/predict` request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormInput {
    pub sqft: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub location: String,
}

impl FormInput {
    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Sqft => &self.sqft,
            Field::Bedrooms => &self.bedrooms,
            Field::Bathrooms => &self.bathrooms,
            Field::Location => &self.location,
        }
    }

    /// Replaces the value of a single field, leaving the others untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Sqft => &mut self.sqft,
            Field::Bedrooms => &mut self.bedrooms,
            Field::Bathrooms => &mut self.bathrooms,
            Field::Location => &mut self.location,
        };
        *slot = value.into();
    }

    /// Selects the first location if none is chosen yet.
    ///
    /// Returns `true` if the location was changed.
    pub fn apply_default_location(&mut self, locations: &[String]) -> bool {
        match locations.first() {
            Some(first) if self.location.is_empty() => {
                self.location = first.clone();
                true
            }
            _ => false,
        }
    }

    /// Clears every field; location falls back to the first option, if any.
    pub fn reset(&mut self, locations: &[String]) {
        *self = Self {
            location: locations.first().cloned().unwrap_or_default(),
            ..Self::default()
        };
    }

    /// Returns the fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|&field| self.get(field).is_empty())
            .collect()
    }
}
