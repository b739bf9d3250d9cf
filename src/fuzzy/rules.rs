//! Rule base
//!
//! Fixed Mamdani-style rules over the fuzzified nutrients. AND is `min`,
//! OR is `max`, and every rule folds into its category by running maximum.

use serde::Serialize;

use super::category::HealthCategory;
use super::membership::Fuzzified;

/// Minimum strength of [`HealthCategory::NotHealthy`], applied to every input
pub const NOT_HEALTHY_FLOOR: f64 = 0.1;

/// A single rule: an antecedent over the memberships and the category it concludes
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub conclusion: HealthCategory,
    antecedent: fn(&Fuzzified) -> f64,
}

impl Rule {
    /// Firing strength of this rule for the given memberships
    pub fn fire(&self, f: &Fuzzified) -> f64 {
        (self.antecedent)(f)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("conclusion", &self.conclusion)
            .finish()
    }
}

fn lean_protein(f: &Fuzzified) -> f64 {
    f.protein.high.min(f.fat.low)
}

fn balanced_macros(f: &Fuzzified) -> f64 {
    f.protein.medium.min(f.carbs.medium).min(f.fat.medium)
}

fn light_high_protein(f: &Fuzzified) -> f64 {
    f.calories.low.min(f.protein.high)
}

fn fat_and_carb_heavy(f: &Fuzzified) -> f64 {
    f.fat.high.min(f.carbs.high)
}

fn empty_calories(f: &Fuzzified) -> f64 {
    f.calories.high.min(f.protein.low)
}

fn sugary(f: &Fuzzified) -> f64 {
    f.carbs.high.min(f.protein.low)
}

fn light_snack(f: &Fuzzified) -> f64 {
    f.calories
        .low
        .min(f.fat.low.max(f.fat.medium))
        .min(f.carbs.low.max(f.carbs.medium))
}

fn light_moderate_protein(f: &Fuzzified) -> f64 {
    f.calories.low.min(f.protein.medium)
}

/// The complete rule base, in evaluation order
pub const RULES: [Rule; 8] = [
    Rule { name: "lean_protein", conclusion: HealthCategory::VeryHealthy, antecedent: lean_protein },
    Rule { name: "balanced_macros", conclusion: HealthCategory::Healthy, antecedent: balanced_macros },
    Rule { name: "light_high_protein", conclusion: HealthCategory::VeryHealthy, antecedent: light_high_protein },
    Rule { name: "fat_and_carb_heavy", conclusion: HealthCategory::Junk, antecedent: fat_and_carb_heavy },
    Rule { name: "empty_calories", conclusion: HealthCategory::NotHealthy, antecedent: empty_calories },
    Rule { name: "sugary", conclusion: HealthCategory::Junk, antecedent: sugary },
    Rule { name: "light_snack", conclusion: HealthCategory::Healthy, antecedent: light_snack },
    Rule { name: "light_moderate_protein", conclusion: HealthCategory::VeryHealthy, antecedent: light_moderate_protein },
];

/// Aggregated firing strength per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RuleStrength {
    pub very_healthy: f64,
    pub healthy: f64,
    pub not_healthy: f64,
    pub junk: f64,
}

impl RuleStrength {
    pub fn get(&self, category: HealthCategory) -> f64 {
        match category {
            HealthCategory::VeryHealthy => self.very_healthy,
            HealthCategory::Healthy => self.healthy,
            HealthCategory::NotHealthy => self.not_healthy,
            HealthCategory::Junk => self.junk,
        }
    }

    fn slot_mut(&mut self, category: HealthCategory) -> &mut f64 {
        match category {
            HealthCategory::VeryHealthy => &mut self.very_healthy,
            HealthCategory::Healthy => &mut self.healthy,
            HealthCategory::NotHealthy => &mut self.not_healthy,
            HealthCategory::Junk => &mut self.junk,
        }
    }

    /// Fuzzy OR a strength into a category
    pub fn fold(&mut self, category: HealthCategory, strength: f64) {
        let slot = self.slot_mut(category);
        *slot = slot.max(strength);
    }
}

/// Evaluate every rule plus the `NotHealthy` floor
pub fn evaluate(f: &Fuzzified) -> RuleStrength {
    let mut strength = RuleStrength::default();
    for rule in &RULES {
        strength.fold(rule.conclusion, rule.fire(f));
    }
    strength.fold(HealthCategory::NotHealthy, NOT_HEALTHY_FLOOR);
    strength
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientProfile;

    const EPS: f64 = 1e-12;

    fn strengths(calories: f64, protein: f64, fat: f64, carbs: f64) -> RuleStrength {
        evaluate(&Fuzzified::from_profile(&NutrientProfile::new(calories, protein, fat, carbs)))
    }

    #[test]
    fn test_floor_always_applies() {
        let s = strengths(0.0, 0.0, 0.0, 0.0);
        assert_eq!(s.not_healthy, NOT_HEALTHY_FLOOR);
        let s = strengths(400.0, 15.0, 15.0, 60.0);
        assert_eq!(s.not_healthy, NOT_HEALTHY_FLOOR);
    }

    #[test]
    fn test_zero_profile_fires_light_snack() {
        let s = strengths(0.0, 0.0, 0.0, 0.0);
        assert_eq!(s.healthy, 1.0);
        assert_eq!(s.very_healthy, 0.0);
        assert_eq!(s.junk, 0.0);
    }

    #[test]
    fn test_chicken_breast_strengths() {
        let s = strengths(200.0, 25.0, 3.0, 5.0);
        assert!((s.very_healthy - 0.5).abs() < EPS);
        assert!((s.healthy - 0.8).abs() < EPS);
        assert_eq!(s.not_healthy, NOT_HEALTHY_FLOOR);
        assert_eq!(s.junk, 0.0);
    }

    #[test]
    fn test_fried_dessert_strengths() {
        let s = strengths(700.0, 3.0, 35.0, 90.0);
        assert!((s.junk - 0.5).abs() < EPS);
        assert!((s.not_healthy - 0.5).abs() < EPS);
        assert_eq!(s.very_healthy, 0.0);
        assert_eq!(s.healthy, 0.0);
    }

    #[test]
    fn test_rule_order_is_irrelevant() {
        let f = Fuzzified::from_profile(&NutrientProfile::new(350.0, 18.0, 8.0, 35.0));
        let mut reversed = RuleStrength::default();
        for rule in RULES.iter().rev() {
            reversed.fold(rule.conclusion, rule.fire(&f));
        }
        reversed.fold(HealthCategory::NotHealthy, NOT_HEALTHY_FLOOR);
        assert_eq!(reversed, evaluate(&f));
    }

    #[test]
    fn test_fold_keeps_maximum() {
        let mut s = RuleStrength::default();
        s.fold(HealthCategory::Junk, 0.4);
        s.fold(HealthCategory::Junk, 0.2);
        assert_eq!(s.get(HealthCategory::Junk), 0.4);
    }

    #[test]
    fn test_rule_names_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
