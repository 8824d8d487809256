use std::fmt;

use serde::{Deserialize, Serialize};

/// Screening outcome. FAIL is advisory, never a diagnosis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Probability above which a screen fails.
    pub const THRESHOLD: f64 = 0.5;

    /// Strictly greater than the threshold fails; exactly 0.5 passes.
    /// NaN compares false and therefore reads as PASS.
    pub fn from_probability(probability: f64) -> Verdict {
        if probability > Self::THRESHOLD {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub probability: f64,
    pub percent_probability: String,
    pub verdict: Verdict,
}

impl ScoreResult {
    pub fn has_smell_loss(&self) -> bool {
        self.verdict == Verdict::Fail
    }

    /// False when a non-finite input leaked into the formula.
    pub fn is_finite(&self) -> bool {
        self.probability.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Verdict::from_probability(0.5), Verdict::Pass);
        assert_eq!(
            Verdict::from_probability(f64::from_bits(0.5f64.to_bits() + 1)),
            Verdict::Fail
        );
        assert_eq!(Verdict::from_probability(0.0), Verdict::Pass);
        assert_eq!(Verdict::from_probability(1.0), Verdict::Fail);
    }

    #[test]
    fn test_nan_reads_as_pass() {
        assert_eq!(Verdict::from_probability(f64::NAN), Verdict::Pass);
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Verdict::Fail).unwrap(), "\"FAIL\"");
        let v: Verdict = serde_json::from_str("\"PASS\"").unwrap();
        assert_eq!(v, Verdict::Pass);
        assert_eq!(Verdict::Fail.to_string(), "FAIL");
    }
}
