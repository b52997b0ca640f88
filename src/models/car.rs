use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use super::object::deserialize_object;
use super::patch::Patch;

pub const MAKE_MAX_LEN: usize = 50;
pub const MODEL_MAX_LEN: usize = 50;
pub const COLOR_MAX_LEN: usize = 30;
pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2030;

/// A stored car record. Only the repository builds these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    pub fn new(
        id: String,
        input: CarInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            make: input.make,
            model: input.model,
            year: input.year,
            color: input.color,
            price: input.price,
            created_at,
            updated_at,
        }
    }

    /// The mutable part of the record.
    pub fn input(&self) -> CarInput {
        CarInput {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            color: self.color.clone(),
            price: self.price,
        }
    }
}

/// Complete set of mutable fields, as sent to POST and PUT.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(remote = "Self")]
pub struct CarInput {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub make: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2030, message = "must be between 1900 and 2030"))]
    pub year: i32,
    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub color: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,
}

/// Partial update body for PATCH. A key missing from the JSON stays `Unset`;
/// an explicit `null` fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct CarPatch {
    #[serde(default)]
    pub make: Patch<String>,
    #[serde(default)]
    pub model: Patch<String>,
    #[serde(default)]
    pub year: Patch<i32>,
    #[serde(default)]
    pub color: Patch<String>,
    #[serde(default)]
    pub price: Patch<f64>,
}

// Both bodies go through `deserialize_object` first so that only JSON objects
// reach the derived field mapping.
impl<'de> Deserialize<'de> for CarInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = deserialize_object(deserializer)?;
        CarInput::deserialize(body).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for CarPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = deserialize_object(deserializer)?;
        CarPatch::deserialize(body).map_err(D::Error::custom)
    }
}

impl CarPatch {
    pub fn is_empty(&self) -> bool {
        !(self.make.is_set()
            || self.model.is_set()
            || self.year.is_set()
            || self.color.is_set()
            || self.price.is_set())
    }

    /// Overlay the set fields on `current`, keeping its values for the rest.
    pub fn apply(&self, current: &Car) -> CarInput {
        CarInput {
            make: self.make.clone().unwrap_or(current.make.clone()),
            model: self.model.clone().unwrap_or(current.model.clone()),
            year: self.year.unwrap_or(current.year),
            color: self.color.clone().unwrap_or(current.color.clone()),
            price: self.price.unwrap_or(current.price),
        }
    }
}

impl Validate for CarPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Patch::Set(make) = &self.make {
            check_length(&mut errors, "make", make, MAKE_MAX_LEN);
        }
        if let Patch::Set(model) = &self.model {
            check_length(&mut errors, "model", model, MODEL_MAX_LEN);
        }
        if let Patch::Set(year) = self.year {
            if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
                let message = format!("must be between {} and {}", YEAR_MIN, YEAR_MAX);
                errors.add("year", invalid("range", message));
            }
        }
        if let Patch::Set(color) = &self.color {
            check_length(&mut errors, "color", color, COLOR_MAX_LEN);
        }
        if let Patch::Set(price) = self.price {
            // written so that NaN is rejected as well
            if !(price > 0.0) {
                errors.add("price", invalid("range", "must be greater than 0".to_string()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_length(errors: &mut ValidationErrors, field: &'static str, value: &str, max: usize) {
    let len = value.chars().count();
    if len < 1 || len > max {
        errors.add(field, invalid("length", format!("must be between 1 and {} characters", max)));
    }
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

/// Flatten validation errors into `"field: message, ..."`, sorted by field.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error.message.as_deref().unwrap_or(error.code.as_ref());
            parts.push(format!("{}: {}", field, message));
        }
    }
    parts.sort();
    parts.join(", ")
}
