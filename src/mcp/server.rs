//! Nutrigrade MCP Server Implementation
//!
//! Exposes the grading tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{FoodEntry, NutrientProfile};
use crate::tools::grading::{self, ToolError};
use crate::tools::status::StatusTracker;

/// Nutrigrade MCP Service
#[derive(Clone)]
pub struct NutrigradeService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<NutrigradeService>,
}

impl Default for NutrigradeService {
    fn default() -> Self {
        Self::new()
    }
}

impl NutrigradeService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClassifyNutritionParams {
    /// Energy in kcal (default 0)
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams (default 0)
    #[serde(default)]
    pub protein: f64,
    /// Fat in grams (default 0)
    #[serde(default)]
    pub fat: f64,
    /// Carbohydrates in grams (default 0)
    #[serde(default)]
    pub carbs: f64,
    /// Include membership degrees and rule strengths (default false)
    #[serde(default)]
    pub include_details: bool,
}

/// Single food item of a meal
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FoodEntryParam {
    /// Name of the food
    #[serde(default)]
    pub food_name: String,
    /// Food category (Fruit, Fast Food, Drink, ...)
    pub food_type: Option<String>,
    /// One sentence explanation of the estimate
    pub reasoning_summary: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    #[serde(alias = "fat")]
    pub fats: Option<f64>,
}

impl From<FoodEntryParam> for FoodEntry {
    fn from(p: FoodEntryParam) -> Self {
        FoodEntry {
            food_name: p.food_name,
            food_type: p.food_type,
            reasoning_summary: p.reasoning_summary,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fats: p.fats,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMealParams {
    /// Food items making up the meal
    pub items: Vec<FoodEntryParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzePayloadParams {
    /// Raw JSON text from the nutrition analysis service
    pub payload: String,
}

/// Every tool error is caused by the caller's input
fn tool_error(e: ToolError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl NutrigradeService {
    #[tool(description = "Get the current status of the Nutrigrade service including build info, classifier configuration, and process information")]
    async fn nutrigrade_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for grading food and meals, including the rule base and category thresholds. Call this when unsure how to use the grading tools.")]
    fn classification_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CLASSIFICATION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CLASSIFICATION_INSTRUCTIONS)]))
    }

    #[tool(description = "Grade one nutritional profile (calories, protein, fat, carbs) into a 0-100 health score and category")]
    fn classify_nutrition(&self, Parameters(p): Parameters<ClassifyNutritionParams>) -> Result<CallToolResult, McpError> {
        let profile = NutrientProfile::new(p.calories, p.protein, p.fat, p.carbs);
        let result = grading::classify_nutrition(profile, p.include_details).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Grade every food item of a meal individually, then grade the meal from the summed totals")]
    fn analyze_meal(&self, Parameters(p): Parameters<AnalyzeMealParams>) -> Result<CallToolResult, McpError> {
        let entries = p.items.into_iter().map(FoodEntry::from).collect();
        let result = grading::analyze_meal(entries).map_err(tool_error)?;
        json_result(&result)
    }

    #[tool(description = "Grade a raw nutrition analysis response (JSON array of items, a single item, or {\"items\": [...]}) as a meal")]
    fn analyze_payload(&self, Parameters(p): Parameters<AnalyzePayloadParams>) -> Result<CallToolResult, McpError> {
        let result = grading::analyze_payload(&p.payload).map_err(tool_error)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutrigradeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrigrade".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Nutrigrade".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nutrigrade - fuzzy health grading of food. \
                 Call classification_instructions first if unsure. \
                 Single profile: classify_nutrition. \
                 Meals: analyze_meal (structured items) or analyze_payload (raw analysis JSON). \
                 Status: nutrigrade_status."
                    .into(),
            ),
        }
    }
}
