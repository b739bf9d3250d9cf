//! Grading tools
//!
//! Grade a single nutrient profile, or a whole meal: every entry on its own
//! and then the summed total.

use serde::Serialize;
use thiserror::Error;

use crate::fuzzy::{self, ClassificationResult, Fuzzified, HealthCategory, RuleStrength};
use crate::models::{AnalysisPayload, FoodEntry, NutrientProfile};
use super::accent::Accent;

/// Summary line for a meal of more than one item
pub const MEAL_SUMMARY: &str = "Meal Analysis Complete";

/// Errors raised while validating tool input
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Meal must contain at least one food item")]
    EmptyMeal,

    #[error("{nutrient} must be a finite number, got {value}")]
    NonFinite { nutrient: &'static str, value: f64 },

    #[error("Could not decode analysis payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;

/// Score, category and display accent
#[derive(Debug, Clone, Serialize)]
pub struct Grade {
    pub score: f64,
    pub category: HealthCategory,
    pub accent: Accent,
}

impl From<ClassificationResult> for Grade {
    fn from(result: ClassificationResult) -> Self {
        Self {
            score: result.score(),
            category: result.category(),
            accent: result.category().into(),
        }
    }
}

/// Intermediate fuzzy state, returned on request
#[derive(Debug, Clone, Serialize)]
pub struct GradeDetails {
    pub memberships: Fuzzified,
    pub strengths: RuleStrength,
}

/// Response for classify_nutrition
#[derive(Debug, Serialize)]
pub struct ClassifyNutritionResponse {
    pub profile: NutrientProfile,
    pub grade: Grade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<GradeDetails>,
}

/// One graded entry of a meal
#[derive(Debug, Serialize)]
pub struct GradedItem {
    pub food_name: String,
    pub food_type: Option<String>,
    pub profile: NutrientProfile,
    pub grade: Grade,
}

/// Response for analyze_meal
#[derive(Debug, Serialize)]
pub struct AnalyzeMealResponse {
    pub items: Vec<GradedItem>,
    pub total: NutrientProfile,
    pub meal_grade: Grade,
    pub summary: String,
}

fn validate(profile: &NutrientProfile) -> ToolResult<()> {
    match profile.first_non_finite() {
        Some((nutrient, value)) => {
            tracing::warn!(nutrient, value, "rejected non-finite nutrient value");
            Err(ToolError::NonFinite { nutrient, value })
        }
        None => Ok(()),
    }
}

/// Grade a single profile
pub fn classify_nutrition(
    profile: NutrientProfile,
    include_details: bool,
) -> ToolResult<ClassifyNutritionResponse> {
    validate(&profile)?;

    let inference = fuzzy::infer(&profile);
    tracing::debug!(score = inference.result.score(), category = %inference.result.category(), "graded profile");

    Ok(ClassifyNutritionResponse {
        profile,
        grade: inference.result.into(),
        details: include_details.then(|| GradeDetails {
            memberships: inference.memberships,
            strengths: inference.strengths,
        }),
    })
}

/// Grade each entry, then the meal as a whole
pub fn analyze_meal(entries: Vec<FoodEntry>) -> ToolResult<AnalyzeMealResponse> {
    if entries.is_empty() {
        tracing::warn!("rejected empty meal");
        return Err(ToolError::EmptyMeal);
    }

    let mut items = Vec::with_capacity(entries.len());
    for entry in &entries {
        let profile = entry.profile();
        validate(&profile)?;
        items.push(GradedItem {
            food_name: entry.food_name.clone(),
            food_type: entry.food_type.clone(),
            profile,
            grade: fuzzy::classify(&profile).into(),
        });
    }

    let total: NutrientProfile = items.iter().map(|item| item.profile).sum();
    let meal_grade: Grade = fuzzy::classify(&total).into();

    let summary = match entries.as_slice() {
        [only] => only.reasoning_summary.clone().unwrap_or_default(),
        _ => MEAL_SUMMARY.to_string(),
    };

    tracing::info!(
        items = items.len(),
        score = meal_grade.score,
        category = %meal_grade.category,
        "analyzed meal"
    );

    Ok(AnalyzeMealResponse { items, total, meal_grade, summary })
}

/// Decode a raw analysis-service response and grade it as a meal
pub fn analyze_payload(payload: &str) -> ToolResult<AnalyzeMealResponse> {
    let decoded: AnalysisPayload = serde_json::from_str(payload)?;
    analyze_meal(decoded.into_entries())
}
