//! Nutrigrade Status Tool
//!
//! Runtime status and usage instructions for the grading service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::fuzzy::category::{HEALTHY_THRESHOLD, NOT_HEALTHY_THRESHOLD, VERY_HEALTHY_THRESHOLD};
use crate::fuzzy::{NOT_HEALTHY_FLOOR, RULES};

/// Grading instructions for AI assistants
pub const CLASSIFICATION_INSTRUCTIONS: &str = r#"
# Nutrigrade Instructions

Nutrigrade grades food by its calories, protein, fat and carbohydrates using a
fixed fuzzy rule base. It returns a score from 0 to 100 and one of four
categories.

## Tools

- `classify_nutrition` - grade one set of numbers. Pass `include_details: true`
  to see the membership degrees and per-category rule strengths.
- `analyze_meal` - grade a list of food items, each on its own, plus the
  summed total of the whole meal.
- `analyze_payload` - same as `analyze_meal`, but takes the raw JSON text
  returned by a nutrition analysis service. Accepts an array of items, a
  single item object, or `{"items": [...]}`.

## Inputs

| Field | Unit |
|-------|------|
| calories | kcal |
| protein | grams |
| fat (`fats` on food items) | grams |
| carbs | grams |

Missing values count as 0. Values must be finite numbers.

## Categories

| Score | Category | Label |
|-------|----------|-------|
| 80 and above | very_healthy | Very Healthy |
| 60 to 80 | healthy | Healthy |
| 30 to 60 | not_healthy | Not Healthy |
| below 30 | junk | Junk Food |

## Rules

1. High protein and low fat: very healthy
2. Medium protein, medium carbs and medium fat: healthy
3. Low calories and high protein: very healthy
4. High fat and high carbs: junk
5. High calories and low protein: not healthy
6. High carbs and low protein: junk
7. Low calories with low-or-medium fat and low-or-medium carbs: healthy
8. Low calories and medium protein: very healthy

"Not healthy" always carries a small baseline weight, so a grade is returned
for every input.

## Notes

- Grades are computed fresh on every call; nothing is stored.
- The meal grade is computed from summed totals, not by averaging item scores.
"#;

/// Runtime status of the grading service
#[derive(Debug, Clone, Serialize)]
pub struct NutrigradeStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Classifier configuration
    pub rule_count: usize,
    pub not_healthy_floor: f64,
    pub thresholds: Thresholds,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Thresholds {
    pub very_healthy: f64,
    pub healthy: f64,
    pub not_healthy: f64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self) -> NutrigradeStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutrigradeStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            rule_count: RULES.len(),
            not_healthy_floor: NOT_HEALTHY_FLOOR,
            thresholds: Thresholds {
                very_healthy: VERY_HEALTHY_THRESHOLD,
                healthy: HEALTHY_THRESHOLD,
                not_healthy: NOT_HEALTHY_THRESHOLD,
            },
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
