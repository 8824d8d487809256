use fourcast::{score, RiskScorer, ScoreInput, Verdict};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn input(age: f64, has_diabetes: bool, smell_rating: f64, safety_impact: f64) -> ScoreInput {
    ScoreInput {
        age,
        has_diabetes,
        smell_rating,
        safety_impact,
    }
}

#[test]
fn default_answers_pass() {
    init_logger();
    let result = score(input(50.0, false, 50.0, 50.0));

    assert!((result.probability - 0.36158786114753794).abs() < 1e-12);
    assert_eq!(result.percent_probability, "36.2");
    assert_eq!(result.verdict, Verdict::Pass);
    assert!(!result.has_smell_loss());
}

#[test]
fn older_diabetic_with_poor_smell_fails() {
    init_logger();
    let result = score(input(80.0, true, 10.0, 90.0));

    assert!((result.probability - 0.8459024840578704).abs() < 1e-12);
    assert_eq!(result.percent_probability, "84.6");
    assert_eq!(result.verdict, Verdict::Fail);
    assert!(result.has_smell_loss());
}

#[test]
fn minimal_risk_answers_pass() {
    init_logger();
    let result = score(input(1.0, false, 100.0, 0.0));

    assert!((result.probability - 0.09298415414015432).abs() < 1e-12);
    assert_eq!(result.percent_probability, "9.3");
    assert_eq!(result.verdict, Verdict::Pass);
}

#[test]
fn diabetes_alone_can_flip_the_verdict() {
    let without = score(input(50.0, false, 50.0, 50.0));
    let with = score(input(50.0, true, 50.0, 50.0));

    assert_eq!(without.verdict, Verdict::Pass);
    assert_eq!(with.verdict, Verdict::Fail);
    assert_eq!(with.percent_probability, "67.5");
}

#[test]
fn extreme_answers_stay_in_unit_interval() {
    let high = score(input(120.0, true, 100.0, 100.0));
    assert_eq!(high.percent_probability, "99.8");
    assert_eq!(high.verdict, Verdict::Fail);

    let low = score(input(1.0, false, 0.0, 0.0));
    assert_eq!(low.percent_probability, "0.6");
    assert_eq!(low.verdict, Verdict::Pass);
}

#[test]
fn batch_matches_single_scores() {
    let scorer = RiskScorer::default();
    let inputs = [
        input(50.0, false, 50.0, 50.0),
        input(80.0, true, 10.0, 90.0),
        input(1.0, false, 100.0, 0.0),
    ];

    let batch = scorer.score_batch(&inputs);

    assert_eq!(batch.len(), inputs.len());
    for (result, input) in batch.iter().zip(inputs.iter()) {
        assert_eq!(*result, scorer.score(input));
    }
}

#[test]
fn free_function_uses_shipped_revision() {
    let scorer = RiskScorer::default();
    let input = input(63.0, true, 35.0, 72.0);
    assert_eq!(score(input), scorer.score(&input));
}

#[test]
fn result_serializes_for_presentation_layer() {
    let result = score(input(80.0, true, 10.0, 90.0));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["verdict"], "FAIL");
    assert_eq!(json["percent_probability"], "84.6");
}
