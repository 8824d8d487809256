//! 4CAST smell-loss screening score.
//!
//! Evaluates a fixed logistic-regression model over four questionnaire
//! inputs (age, type 2 diabetes, self-rated smell ability and the safety
//! impact of reduced smell) and returns a probability, a one-decimal
//! percentage and a PASS/FAIL verdict.
//!
//! ```
//! use fourcast::{score, ScoreInput, Verdict};
//!
//! let result = score(ScoreInput {
//!     age: 80.0,
//!     has_diabetes: true,
//!     smell_rating: 10.0,
//!     safety_impact: 90.0,
//! });
//! assert_eq!(result.verdict, Verdict::Fail);
//! assert_eq!(result.percent_probability, "84.6");
//! ```

pub mod advisory;
pub mod coefficients;
pub mod error;
pub mod explain;
pub mod format;
pub mod scorer;
pub mod validation;
pub mod verdict;

pub use advisory::{advise, Advice, DISCLAIMER};
pub use coefficients::{ModelCoefficients, ModelRevision, FOURCAST_V1};
pub use error::{InputError, ModelError};
pub use explain::{explain, Explanation, FeatureContribution};
pub use format::format_percent;
pub use scorer::{score, sigmoid, RiskScorer, ScoreInput};
pub use validation::{validate_input, InputLimits, ValidationReport};
pub use verdict::{ScoreResult, Verdict};

/// Minimal trait for prediction models
pub trait Model {
    fn name(&self) -> &str;
    fn version(&self) -> &str;
}
