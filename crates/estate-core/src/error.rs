//! Error Types for Estate Forecaster

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EstateError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstateError {
    #[error("{field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("{field} must be a multiple of {step}, got {value}")]
    InvalidStep {
        field: &'static str,
        value: String,
        step: String,
    },

    #[error("Invalid {field}: {value}")]
    InvalidChoice {
        field: &'static str,
        value: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EstateError {
    pub fn out_of_range(
        field: &'static str,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            EstateError::OutOfRange { .. } => "OUT_OF_RANGE",
            EstateError::InvalidStep { .. } => "INVALID_STEP",
            EstateError::InvalidChoice { .. } => "INVALID_CHOICE",
            EstateError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            EstateError::OutOfRange { field, min, max, .. } => {
                format!("Please choose a {} between {} and {}.", field.replace('_', " "), min, max)
            }
            EstateError::InvalidStep { field, step, .. } => {
                format!("The {} must be given in steps of {}.", field.replace('_', " "), step)
            }
            EstateError::InvalidChoice { field, .. } => {
                format!("Please pick one of the listed options for {}.", field.replace('_', " "))
            }
            EstateError::Config(_) => "Service configuration error.".into(),
        }
    }
}
