//! Health categories
//!
//! The output labels of the classifier, their representative values for
//! defuzzification and the score thresholds that map back onto them.

use serde::{Deserialize, Serialize};

/// Qualitative health category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    VeryHealthy,
    Healthy,
    NotHealthy,
    Junk,
}

/// Lower score bound for [`HealthCategory::VeryHealthy`]
pub const VERY_HEALTHY_THRESHOLD: f64 = 80.0;
/// Lower score bound for [`HealthCategory::Healthy`]
pub const HEALTHY_THRESHOLD: f64 = 60.0;
/// Lower score bound for [`HealthCategory::NotHealthy`]
pub const NOT_HEALTHY_THRESHOLD: f64 = 30.0;

impl HealthCategory {
    /// All categories, best first
    pub const ALL: [HealthCategory; 4] = [
        HealthCategory::VeryHealthy,
        HealthCategory::Healthy,
        HealthCategory::NotHealthy,
        HealthCategory::Junk,
    ];

    /// Crisp value this category pulls the score towards
    pub fn representative_value(&self) -> f64 {
        match self {
            HealthCategory::VeryHealthy => 100.0,
            HealthCategory::Healthy => 75.0,
            HealthCategory::NotHealthy => 40.0,
            HealthCategory::Junk => 10.0,
        }
    }

    /// Map a score onto its category, checking the highest threshold first
    pub fn from_score(score: f64) -> Self {
        if score >= VERY_HEALTHY_THRESHOLD {
            HealthCategory::VeryHealthy
        } else if score >= HEALTHY_THRESHOLD {
            HealthCategory::Healthy
        } else if score >= NOT_HEALTHY_THRESHOLD {
            HealthCategory::NotHealthy
        } else {
            HealthCategory::Junk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCategory::VeryHealthy => "very_healthy",
            HealthCategory::Healthy => "healthy",
            HealthCategory::NotHealthy => "not_healthy",
            HealthCategory::Junk => "junk",
        }
    }
}

impl std::fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(HealthCategory::from_score(100.0), HealthCategory::VeryHealthy);
        assert_eq!(HealthCategory::from_score(80.0), HealthCategory::VeryHealthy);
        assert_eq!(HealthCategory::from_score(79.999), HealthCategory::Healthy);
        assert_eq!(HealthCategory::from_score(60.0), HealthCategory::Healthy);
        assert_eq!(HealthCategory::from_score(59.999), HealthCategory::NotHealthy);
        assert_eq!(HealthCategory::from_score(30.0), HealthCategory::NotHealthy);
        assert_eq!(HealthCategory::from_score(29.999), HealthCategory::Junk);
        assert_eq!(HealthCategory::from_score(0.0), HealthCategory::Junk);
    }

    #[test]
    fn test_representative_values_map_to_own_category() {
        for category in HealthCategory::ALL {
            assert_eq!(HealthCategory::from_score(category.representative_value()), category);
        }
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&HealthCategory::VeryHealthy).unwrap();
        assert_eq!(json, "\"very_healthy\"");
        let back: HealthCategory = serde_json::from_str("\"not_healthy\"").unwrap();
        assert_eq!(back, HealthCategory::NotHealthy);
    }
}
