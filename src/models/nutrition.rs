//! Nutrient profile
//!
//! The four macronutrient figures the classifier works from. Used for single
//! food entries and for summed meal totals alike.

use serde::{Deserialize, Serialize};

/// Calories and macronutrients of a food or meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub carbs: f64,   // grams
}

impl NutrientProfile {
    pub fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self { calories, protein, fat, carbs }
    }

    /// Create a profile with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every value by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carbs: self.carbs * multiplier,
        }
    }

    /// Add another profile to this one
    pub fn add(&self, other: &NutrientProfile) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }

    /// Name and value of the first non-finite field, if any
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
            ("carbs", self.carbs),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
    }
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientProfile {
    type Output = NutrientProfile;

    fn mul(self, multiplier: f64) -> NutrientProfile {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_profiles() {
        let total: NutrientProfile = vec![
            NutrientProfile::new(200.0, 25.0, 3.0, 5.0),
            NutrientProfile::new(150.0, 4.0, 1.0, 30.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, NutrientProfile::new(350.0, 29.0, 4.0, 35.0));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: NutrientProfile = std::iter::empty().sum();
        assert_eq!(total, NutrientProfile::zero());
    }

    #[test]
    fn test_scale() {
        let doubled = NutrientProfile::new(100.0, 10.0, 5.0, 20.0) * 2.0;
        assert_eq!(doubled, NutrientProfile::new(200.0, 20.0, 10.0, 40.0));
    }

    #[test]
    fn test_first_non_finite() {
        assert_eq!(NutrientProfile::new(1.0, 2.0, 3.0, 4.0).first_non_finite(), None);
        let bad = NutrientProfile::new(1.0, 2.0, f64::INFINITY, 4.0);
        assert_eq!(bad.first_non_finite(), Some(("fat", f64::INFINITY)));
    }
}
