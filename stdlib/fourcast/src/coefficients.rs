//! Model revisions: the trained weights of the 4CAST logistic regression.
//!
//! A revision is immutable once built. Swapping models means constructing a
//! [`RiskScorer`](crate::RiskScorer) with another revision, and any change to
//! the numbers is a new version that needs re-validation.

use std::borrow::Cow;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One weight per questionnaire feature plus the intercept
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelCoefficients {
    pub age: f64,
    pub smell_rating: f64,
    pub safety_impact: f64,
    pub diabetes: f64,
    pub intercept: f64,
}

impl ModelCoefficients {
    /// Feature weights in scoring order, intercept excluded.
    pub fn feature_weights(&self) -> [(&'static str, f64); 4] {
        [
            ("age", self.age),
            ("smell_rating", self.smell_rating),
            ("safety_impact", self.safety_impact),
            ("diabetes", self.diabetes),
        ]
    }

    fn check_finite(&self) -> Result<(), ModelError> {
        let named = self
            .feature_weights()
            .into_iter()
            .chain(std::iter::once(("intercept", self.intercept)));
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// A named, versioned coefficient set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRevision {
    pub name: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub coefficients: ModelCoefficients,
}

/// The shipped 4CAST model.
pub const FOURCAST_V1: ModelRevision = ModelRevision {
    name: Cow::Borrowed("4CAST"),
    version: Cow::Borrowed("1"),
    coefficients: ModelCoefficients {
        age: 0.043105212902502056,
        smell_rating: 0.027966104711863282,
        safety_impact: 0.019908032571725683,
        diabetes: 1.3004639643330465,
        intercept: -5.117446511633389,
    },
};

impl Default for ModelRevision {
    fn default() -> Self {
        FOURCAST_V1
    }
}

impl ModelRevision {
    /// Parse and check a revision from its JSON form.
    pub fn from_json_str(s: &str) -> Result<ModelRevision, ModelError> {
        let revision: ModelRevision = serde_json::from_str(s)?;
        revision.check()?;
        Ok(revision)
    }

    /// Read a revision file such as one produced by `serde_json::to_string(&FOURCAST_V1)`.
    pub fn load(path: impl AsRef<Path>) -> Result<ModelRevision, ModelError> {
        let path = path.as_ref();
        let s = read_to_string(path)?;
        let revision = Self::from_json_str(&s)?;
        log::info!(
            "loaded model revision {} v{} from {}",
            revision.name,
            revision.version,
            path.display()
        );
        Ok(revision)
    }

    /// Reject revisions that could not have come out of a fit.
    pub fn check(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        if self.version.trim().is_empty() {
            return Err(ModelError::EmptyField("version"));
        }
        self.coefficients.check_finite()
    }
}
