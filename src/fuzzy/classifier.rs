//! Fuzzy health classifier
//!
//! Pure function from a [`NutrientProfile`] to a score and category.

use serde::Serialize;

use super::category::HealthCategory;
use super::defuzzify::defuzzify;
use super::membership::Fuzzified;
use super::rules::{self, RuleStrength};
use crate::models::NutrientProfile;

/// Score in `[0, 100]` together with the category it falls into
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    score: f64,
    category: HealthCategory,
}

impl ClassificationResult {
    /// The category is always derived from the score
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            category: HealthCategory::from_score(score),
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn category(&self) -> HealthCategory {
        self.category
    }
}

/// Full trace of one classification: memberships, category strengths and result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inference {
    pub memberships: Fuzzified,
    pub strengths: RuleStrength,
    pub result: ClassificationResult,
}

/// Classify a profile, keeping the intermediate fuzzy state
pub fn infer(profile: &NutrientProfile) -> Inference {
    let memberships = Fuzzified::from_profile(profile);
    let strengths = rules::evaluate(&memberships);
    let result = ClassificationResult::from_score(defuzzify(&strengths));

    tracing::trace!(
        very_healthy = strengths.very_healthy,
        healthy = strengths.healthy,
        not_healthy = strengths.not_healthy,
        junk = strengths.junk,
        score = result.score,
        "classified nutrient profile"
    );

    Inference { memberships, strengths, result }
}

/// Classify a profile
pub fn classify(profile: &NutrientProfile) -> ClassificationResult {
    infer(profile).result
}
