//! Membership functions and nutrient fuzzification
//!
//! Each nutrient is described by a low trapezoid, a medium triangle and a
//! high trapezoid. Breakpoints are fixed domain constants.

use serde::Serialize;

use crate::models::NutrientProfile;

/// Triangular membership.
///
/// Zero at and outside `low`/`high`, exactly one at `peak`.
pub fn tri(val: f64, low: f64, peak: f64, high: f64) -> f64 {
    if val <= low || val >= high {
        return 0.0;
    }
    if val == peak {
        return 1.0;
    }
    if val < peak {
        (val - low) / (peak - low)
    } else {
        (high - val) / (high - peak)
    }
}

/// Left shoulder: one up to `peak`, falling to zero at `high`.
pub fn trap_low(val: f64, peak: f64, high: f64) -> f64 {
    if val <= peak {
        1.0
    } else if val >= high {
        0.0
    } else {
        (high - val) / (high - peak)
    }
}

/// Right shoulder: zero up to `low`, rising to one at `peak`.
pub fn trap_high(val: f64, low: f64, peak: f64) -> f64 {
    if val >= peak {
        1.0
    } else if val <= low {
        0.0
    } else {
        (val - low) / (peak - low)
    }
}

/// Breakpoints for the three linguistic terms of one nutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermShape {
    /// `trap_low` plateau end and zero point
    pub low: (f64, f64),
    /// `tri` low, peak, high
    pub medium: (f64, f64, f64),
    /// `trap_high` zero point and saturation point
    pub high: (f64, f64),
}

impl TermShape {
    pub const fn new(low: (f64, f64), medium: (f64, f64, f64), high: (f64, f64)) -> Self {
        Self { low, medium, high }
    }

    /// Fuzzify a crisp value against these breakpoints
    pub fn fuzzify(&self, val: f64) -> MembershipSet {
        MembershipSet {
            low: trap_low(val, self.low.0, self.low.1),
            medium: tri(val, self.medium.0, self.medium.1, self.medium.2),
            high: trap_high(val, self.high.0, self.high.1),
        }
    }
}

pub const CALORIES: TermShape = TermShape::new((150.0, 400.0), (300.0, 500.0, 700.0), (600.0, 800.0));
pub const PROTEIN: TermShape = TermShape::new((5.0, 10.0), (5.0, 15.0, 25.0), (20.0, 30.0));
pub const FAT: TermShape = TermShape::new((5.0, 10.0), (5.0, 15.0, 25.0), (20.0, 30.0));
pub const CARBS: TermShape = TermShape::new((20.0, 40.0), (30.0, 60.0, 90.0), (80.0, 100.0));

/// Degrees of membership of one nutrient in its three terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MembershipSet {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

/// Membership sets for all four nutrients of a profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Fuzzified {
    pub calories: MembershipSet,
    pub protein: MembershipSet,
    pub fat: MembershipSet,
    pub carbs: MembershipSet,
}

impl Fuzzified {
    pub fn from_profile(profile: &NutrientProfile) -> Self {
        Self {
            calories: CALORIES.fuzzify(profile.calories),
            protein: PROTEIN.fuzzify(profile.protein),
            fat: FAT.fuzzify(profile.fat),
            carbs: CARBS.fuzzify(profile.carbs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn in_unit(x: f64) -> bool {
        (0.0..=1.0).contains(&x)
    }

    #[test]
    fn test_tri_boundaries_are_open() {
        assert_eq!(tri(5.0, 5.0, 15.0, 25.0), 0.0);
        assert_eq!(tri(25.0, 5.0, 15.0, 25.0), 0.0);
        assert_eq!(tri(-3.0, 5.0, 15.0, 25.0), 0.0);
        assert_eq!(tri(40.0, 5.0, 15.0, 25.0), 0.0);
    }

    #[test]
    fn test_tri_peak_is_exactly_one() {
        assert_eq!(tri(15.0, 5.0, 15.0, 25.0), 1.0);
        assert_eq!(tri(500.0, 300.0, 500.0, 700.0), 1.0);
        assert_eq!(tri(60.0, 30.0, 60.0, 90.0), 1.0);
    }

    #[test]
    fn test_tri_slopes() {
        assert!((tri(10.0, 5.0, 15.0, 25.0) - 0.5).abs() < EPS);
        assert!((tri(20.0, 5.0, 15.0, 25.0) - 0.5).abs() < EPS);
        assert!((tri(400.0, 300.0, 500.0, 700.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_trap_low() {
        assert_eq!(trap_low(0.0, 150.0, 400.0), 1.0);
        assert_eq!(trap_low(150.0, 150.0, 400.0), 1.0);
        assert!((trap_low(200.0, 150.0, 400.0) - 0.8).abs() < EPS);
        assert_eq!(trap_low(400.0, 150.0, 400.0), 0.0);
        assert_eq!(trap_low(1000.0, 150.0, 400.0), 0.0);
    }

    #[test]
    fn test_trap_high() {
        assert_eq!(trap_high(0.0, 20.0, 30.0), 0.0);
        assert_eq!(trap_high(20.0, 20.0, 30.0), 0.0);
        assert!((trap_high(25.0, 20.0, 30.0) - 0.5).abs() < EPS);
        assert_eq!(trap_high(30.0, 20.0, 30.0), 1.0);
        assert_eq!(trap_high(1e9, 20.0, 30.0), 1.0);
    }

    #[test]
    fn test_degrees_stay_in_unit_interval() {
        let shapes = [CALORIES, PROTEIN, FAT, CARBS];
        for shape in shapes {
            let mut val = -50.0;
            while val <= 1200.0 {
                let set = shape.fuzzify(val);
                assert!(in_unit(set.low), "low out of range at {}", val);
                assert!(in_unit(set.medium), "medium out of range at {}", val);
                assert!(in_unit(set.high), "high out of range at {}", val);
                val += 0.25;
            }
        }
    }

    #[test]
    fn test_terms_overlap() {
        // 350 kcal is partly low and partly medium
        let set = CALORIES.fuzzify(350.0);
        assert!((set.low - 0.2).abs() < EPS);
        assert!((set.medium - 0.25).abs() < EPS);
        assert_eq!(set.high, 0.0);
    }

    #[test]
    fn test_zero_profile_saturates_low_terms() {
        let f = Fuzzified::from_profile(&NutrientProfile::default());
        for set in [f.calories, f.protein, f.fat, f.carbs] {
            assert_eq!(set.low, 1.0);
            assert_eq!(set.medium, 0.0);
            assert_eq!(set.high, 0.0);
        }
    }
}
