//! Fuzzy inference module
//!
//! Fuzzification, rule evaluation and defuzzification of nutrient profiles.

pub mod category;
pub mod classifier;
pub mod defuzzify;
pub mod membership;
pub mod rules;

pub use category::HealthCategory;
pub use classifier::{classify, infer, ClassificationResult, Inference};
pub use defuzzify::{defuzzify, NEUTRAL_SCORE};
pub use membership::{tri, trap_high, trap_low, Fuzzified, MembershipSet};
pub use rules::{evaluate, RuleStrength, NOT_HEALTHY_FLOOR, RULES};
