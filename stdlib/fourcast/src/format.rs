//! One-decimal percentage rendering.
//!
//! Rounds to the nearest tenth judged on the exact binary value of the
//! `f64`, with exact ties going away from zero. `format!("{:.1}")` alone
//! breaks exact ties to even, so ties are detected and bumped first. At one
//! decimal the only exact binary ties are values ending in `.25` or `.75`,
//! which is exactly when `x * 4` is an odd integer (the product is exact).

/// Render a percentage with exactly one fractional digit.
pub fn format_percent(percent: f64) -> String {
    if is_tenths_tie(percent) {
        // percent * 10 is exact here, so round() sees the true tie
        let bumped = (percent * 10.0).round() / 10.0;
        format!("{bumped:.1}")
    } else {
        format!("{percent:.1}")
    }
}

fn is_tenths_tie(x: f64) -> bool {
    let quarters = x * 4.0;
    quarters.is_finite() && quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0
}
