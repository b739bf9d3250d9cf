//! Nutrigrade Library
//!
//! Fuzzy health grading of nutritional profiles.

pub mod build_info;
pub mod fuzzy;
pub mod mcp;
pub mod models;
pub mod tools;
