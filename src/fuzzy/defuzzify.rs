//! Weighted-centroid defuzzification

use super::category::HealthCategory;
use super::rules::RuleStrength;

/// Score returned when no category carries any strength
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Strength-weighted average of the category representative values
pub fn defuzzify(strength: &RuleStrength) -> f64 {
    let (numerator, denominator) = HealthCategory::ALL
        .iter()
        .fold((0.0, 0.0), |(num, den), &category| {
            let s = strength.get(category);
            (num + s * category.representative_value(), den + s)
        });

    if denominator == 0.0 {
        NEUTRAL_SCORE
    } else {
        numerator / denominator
    }
}
