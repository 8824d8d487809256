use serde::{Deserialize, Serialize};

use crate::scorer::{sigmoid, RiskScorer, ScoreInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub coefficient: f64,
    pub value: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub linear_predictor: f64,
    pub probability: f64,
    pub intercept: f64,
    pub contributions: Vec<FeatureContribution>,
}

/// Break a score down into per-feature terms of the linear predictor.
pub fn explain(model: &RiskScorer, input: &ScoreInput) -> Explanation {
    let coefficients = &model.revision().coefficients;
    let values = [
        input.age,
        input.smell_rating,
        input.safety_impact,
        input.diabetes_indicator(),
    ];

    let mut contributions = Vec::new();
    let mut sum = 0.0;

    for ((name, w), x) in coefficients.feature_weights().into_iter().zip(values) {
        let c = x * w;
        contributions.push(FeatureContribution {
            feature: name.to_string(),
            coefficient: w,
            value: x,
            contribution: c,
        });
        sum += c;
    }

    let linear_predictor = sum + coefficients.intercept;

    Explanation {
        linear_predictor,
        probability: sigmoid(linear_predictor),
        intercept: coefficients.intercept,
        contributions,
    }
}
