use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::scorer::ScoreInput;

/// Accepted answer ranges, inclusive on both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub age: RangeInclusive<f64>,
    pub rating: RangeInclusive<f64>,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            age: 1.0..=120.0,
            rating: 0.0..=100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<InputError>,
}

/// Check every answer against `limits`, collecting all problems.
pub fn validate_input(input: &ScoreInput, limits: &InputLimits) -> ValidationReport {
    let mut issues = Vec::new();

    if !input.age.is_finite() {
        issues.push(InputError::NonFinite { field: "age" });
    } else if !limits.age.contains(&input.age) {
        issues.push(InputError::AgeOutOfRange {
            value: input.age,
            min: *limits.age.start(),
            max: *limits.age.end(),
        });
    }

    if !input.smell_rating.is_finite() {
        issues.push(InputError::NonFinite {
            field: "smell rating",
        });
    } else if !limits.rating.contains(&input.smell_rating) {
        issues.push(InputError::SmellRatingOutOfRange {
            value: input.smell_rating,
            min: *limits.rating.start(),
            max: *limits.rating.end(),
        });
    }

    if !input.safety_impact.is_finite() {
        issues.push(InputError::NonFinite {
            field: "safety impact",
        });
    } else if !limits.rating.contains(&input.safety_impact) {
        issues.push(InputError::SafetyImpactOutOfRange {
            value: input.safety_impact,
            min: *limits.rating.start(),
            max: *limits.rating.end(),
        });
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
    }
}
