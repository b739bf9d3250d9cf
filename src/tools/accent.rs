//! Display accents
//!
//! Label and colour pairing shown next to a grade. Purely cosmetic; the
//! classifier never looks at these.

use serde::Serialize;

use crate::fuzzy::HealthCategory;

/// Human label and colour for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub label: &'static str,
    pub color_class: &'static str,
    pub color_name: &'static str,
}

impl From<HealthCategory> for Accent {
    fn from(category: HealthCategory) -> Self {
        match category {
            HealthCategory::VeryHealthy => Accent {
                label: "Very Healthy",
                color_class: "text-emerald-400",
                color_name: "emerald",
            },
            HealthCategory::Healthy => Accent {
                label: "Healthy",
                color_class: "text-green-400",
                color_name: "green",
            },
            HealthCategory::NotHealthy => Accent {
                label: "Not Healthy",
                color_class: "text-orange-400",
                color_name: "orange",
            },
            HealthCategory::Junk => Accent {
                label: "Junk Food",
                color_class: "text-red-500",
                color_name: "red",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_distinct_accent() {
        let accents: Vec<Accent> = HealthCategory::ALL.iter().map(|&c| c.into()).collect();
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a.label, b.label);
                assert_ne!(a.color_name, b.color_name);
            }
        }
    }

    #[test]
    fn test_junk_label() {
        let accent = Accent::from(HealthCategory::Junk);
        assert_eq!(accent.label, "Junk Food");
        assert_eq!(accent.color_class, "text-red-500");
    }
}
