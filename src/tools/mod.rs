//! Nutrigrade Tools module
//!
//! MCP tool implementations for grading food and meals.

pub mod accent;
pub mod grading;
pub mod status;
