use fourcast::{advise, explain, validate_input, InputLimits, RiskScorer, ScoreInput, DISCLAIMER};

fn main() {
    env_logger::init();

    let scorer = RiskScorer::default();
    let answers = ScoreInput {
        age: 72.0,
        has_diabetes: true,
        smell_rating: 30.0,
        safety_impact: 65.0,
    };

    let report = validate_input(&answers, &InputLimits::default());
    for issue in &report.issues {
        eprintln!("{issue}");
    }

    let result = scorer.score(&answers);
    let advice = advise(&result);
    println!("{} ({})", result.verdict, advice.headline);
    if let Some(follow_up) = advice.follow_up {
        println!("{follow_up}");
    }

    for c in explain(&scorer, &answers).contributions {
        println!("  {:<14} {:+.3}", c.feature, c.contribution);
    }
    println!("\n{DISCLAIMER}");
}
