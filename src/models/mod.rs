//! Data models
//!
//! Nutrient profiles and the food entries they are built from.

mod food_entry;
mod nutrition;

pub use food_entry::{AnalysisPayload, FoodEntry};
pub use nutrition::NutrientProfile;
