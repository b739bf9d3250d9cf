//! Food entries from the nutrition analysis service
//!
//! The analysis service reports one object per food item. Any nutrient may be
//! missing or null; those count as zero when the entry is graded.

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// A single analysed food item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub food_type: Option<String>,
    #[serde(default)]
    pub reasoning_summary: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default, alias = "fat")]
    pub fats: Option<f64>,
}

impl FoodEntry {
    /// Nutrient profile with absent values coerced to zero
    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile::new(
            self.calories.unwrap_or(0.0),
            self.protein.unwrap_or(0.0),
            self.fats.unwrap_or(0.0),
            self.carbs.unwrap_or(0.0),
        )
    }
}

impl From<&FoodEntry> for NutrientProfile {
    fn from(entry: &FoodEntry) -> Self {
        entry.profile()
    }
}

/// Response body of the analysis service
///
/// Accepts a bare array, a single object, or an object wrapping an `items` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnalysisPayload {
    List(Vec<FoodEntry>),
    Wrapped { items: Vec<FoodEntry> },
    Single(FoodEntry),
}

impl AnalysisPayload {
    pub fn into_entries(self) -> Vec<FoodEntry> {
        match self {
            AnalysisPayload::List(items) | AnalysisPayload::Wrapped { items } => items,
            AnalysisPayload::Single(entry) => vec![entry],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_values_are_zero() {
        let entry: FoodEntry =
            serde_json::from_str(r#"{"food_name": "Water", "calories": null, "protein": 0}"#).unwrap();
        assert_eq!(entry.profile(), NutrientProfile::zero());
    }

    #[test]
    fn test_fat_alias() {
        let entry: FoodEntry =
            serde_json::from_str(r#"{"food_name": "Butter", "calories": 100, "fat": 11}"#).unwrap();
        assert_eq!(entry.profile(), NutrientProfile::new(100.0, 0.0, 11.0, 0.0));
    }

    #[test]
    fn test_payload_shapes() {
        let list: AnalysisPayload =
            serde_json::from_str(r#"[{"food_name": "Egg"}, {"food_name": "Toast"}]"#).unwrap();
        assert_eq!(list.into_entries().len(), 2);

        let wrapped: AnalysisPayload =
            serde_json::from_str(r#"{"items": [{"food_name": "Egg"}]}"#).unwrap();
        assert_eq!(wrapped.into_entries()[0].food_name, "Egg");

        let single: AnalysisPayload = serde_json::from_str(
            r#"{"food_name": "Milk", "calories": 103, "protein": 8, "carbs": 12, "fats": 2, "food_type": "Drink"}"#,
        )
        .unwrap();
        let entries = single.into_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].food_type.as_deref(), Some("Drink"));
        assert_eq!(entries[0].profile(), NutrientProfile::new(103.0, 8.0, 2.0, 12.0));
    }
}
