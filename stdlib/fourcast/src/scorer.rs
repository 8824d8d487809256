//! The 4CAST scoring core.
//!
//! Scoring is total over finite inputs: values outside the questionnaire's
//! ranges are extrapolated through the formula rather than rejected. Use
//! [`RiskScorer::score_validated`] when the caller wants the range checks.
//! Non-finite inputs poison the result with NaN (see [`ScoreResult::is_finite`]).

use serde::{Deserialize, Serialize};

use crate::coefficients::{ModelRevision, FOURCAST_V1};
use crate::error::InputError;
use crate::format::format_percent;
use crate::validation::{validate_input, InputLimits};
use crate::verdict::{ScoreResult, Verdict};
use crate::Model;

/// Questionnaire answers for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    /// Years, expected 1-120
    pub age: f64,
    /// Diagnosed type 2 diabetes
    pub has_diabetes: bool,
    /// Self-rated ability to smell, 0-100
    pub smell_rating: f64,
    /// Self-rated impact of reduced smell on safety, 0-100
    pub safety_impact: f64,
}

impl Default for ScoreInput {
    /// The questionnaire's starting answers.
    fn default() -> Self {
        Self {
            age: 50.0,
            has_diabetes: false,
            smell_rating: 50.0,
            safety_impact: 50.0,
        }
    }
}

impl ScoreInput {
    pub fn diabetes_indicator(&self) -> f64 {
        if self.has_diabetes {
            1.0
        } else {
            0.0
        }
    }

    fn is_finite(&self) -> bool {
        self.age.is_finite() && self.smell_rating.is_finite() && self.safety_impact.is_finite()
    }
}

/// Numerically stable logistic function; never overflows for large |z|.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Logistic-regression scorer bound to one model revision
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RiskScorer {
    revision: ModelRevision,
}

impl Model for RiskScorer {
    fn name(&self) -> &str {
        &self.revision.name
    }

    fn version(&self) -> &str {
        &self.revision.version
    }
}

impl RiskScorer {
    pub fn new(revision: ModelRevision) -> Self {
        Self { revision }
    }

    pub fn revision(&self) -> &ModelRevision {
        &self.revision
    }

    /// Weighted sum of the inputs plus the intercept.
    pub fn linear_predictor(&self, input: &ScoreInput) -> f64 {
        let c = &self.revision.coefficients;
        input.age * c.age
            + input.smell_rating * c.smell_rating
            + input.safety_impact * c.safety_impact
            + input.diabetes_indicator() * c.diabetes
            + c.intercept
    }

    pub fn score(&self, input: &ScoreInput) -> ScoreResult {
        if !input.is_finite() {
            log::warn!("non-finite questionnaire input {input:?}; result will be NaN");
        }

        let z = self.linear_predictor(input);
        let probability = sigmoid(z);
        log::debug!(
            "{} v{}: z={z} probability={probability}",
            self.revision.name,
            self.revision.version
        );

        ScoreResult {
            probability,
            percent_probability: format_percent(probability * 100.0),
            verdict: Verdict::from_probability(probability),
        }
    }

    pub fn score_batch(&self, inputs: &[ScoreInput]) -> Vec<ScoreResult> {
        inputs.iter().map(|input| self.score(input)).collect()
    }

    /// Score only if every answer lies within the questionnaire's limits;
    /// otherwise return the first violation found.
    pub fn score_validated(&self, input: &ScoreInput) -> Result<ScoreResult, InputError> {
        let report = validate_input(input, &InputLimits::default());
        match report.issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(self.score(input)),
        }
    }
}

/// Score with the shipped [`FOURCAST_V1`] revision.
pub fn score(input: ScoreInput) -> ScoreResult {
    RiskScorer::new(FOURCAST_V1).score(&input)
}
