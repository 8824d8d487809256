use thiserror::Error;

/// Errors raised while loading or checking a model revision
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model revision: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid model revision JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Model revision field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("Coefficient `{name}` is not finite: {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

/// A questionnaire answer outside what the model was fitted on.
///
/// The scorer itself never produces these; they come from
/// [`validate_input`](crate::validate_input) and
/// [`RiskScorer::score_validated`](crate::RiskScorer::score_validated).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("age must be between {min} and {max}, got {value}")]
    AgeOutOfRange { value: f64, min: f64, max: f64 },
    #[error("smell rating must be between {min} and {max}, got {value}")]
    SmellRatingOutOfRange { value: f64, min: f64, max: f64 },
    #[error("safety impact must be between {min} and {max}, got {value}")]
    SafetyImpactOutOfRange { value: f64, min: f64, max: f64 },
}
