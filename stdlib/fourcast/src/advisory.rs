use serde::{Deserialize, Serialize};

use crate::verdict::ScoreResult;

pub const DISCLAIMER: &str = "This tool is for informational purposes only and does not \
constitute medical advice. Please consult with a qualified healthcare professional for any \
health concerns.";

/// What the presentation layer shows next to a verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub headline: String,
    pub message: String,
    pub follow_up: Option<String>,
}

pub fn advise(result: &ScoreResult) -> Advice {
    let headline = format!("{}% probability of smell loss", result.percent_probability);

    if result.has_smell_loss() {
        Advice {
            headline,
            message: format!("{}: screening suggests possible smell loss", result.verdict),
            follow_up: Some("Consider consulting a healthcare professional".to_string()),
        }
    } else {
        Advice {
            headline,
            message: format!("{}: no smell loss indicated", result.verdict),
            follow_up: None,
        }
    }
}
