//! Category tags for product organization.
//!
//! The catalog uses a flat set of category tags rather than a hierarchy;
//! every product carries exactly one.

use serde::{Deserialize, Serialize};

/// A product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Protein powders and bars.
    Protein,
    /// Creatine monohydrate and blends.
    Creatine,
    /// Pre-workout formulas.
    PreWorkout,
    /// Vitamins and multivitamins.
    Vitamins,
    /// Minerals (magnesium, zinc, etc.).
    Minerals,
    /// Fish oil and omega-3 supplements.
    Omega3,
    /// General wellness (collagen, probiotics, etc.).
    Wellness,
}

impl Category {
    /// All categories, in storefront display order.
    pub fn all() -> [Category; 7] {
        [
            Category::Protein,
            Category::Creatine,
            Category::PreWorkout,
            Category::Vitamins,
            Category::Minerals,
            Category::Omega3,
            Category::Wellness,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Creatine => "creatine",
            Category::PreWorkout => "pre-workout",
            Category::Vitamins => "vitamins",
            Category::Minerals => "minerals",
            Category::Omega3 => "omega-3",
            Category::Wellness => "wellness",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Creatine => "Creatine",
            Category::PreWorkout => "Pre-Workout",
            Category::Vitamins => "Vitamins",
            Category::Minerals => "Minerals",
            Category::Omega3 => "Omega-3",
            Category::Wellness => "Wellness",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "protein" => Some(Category::Protein),
            "creatine" => Some(Category::Creatine),
            "pre-workout" => Some(Category::PreWorkout),
            "vitamins" => Some(Category::Vitamins),
            "minerals" => Some(Category::Minerals),
            "omega-3" => Some(Category::Omega3),
            "wellness" => Some(Category::Wellness),
            _ => None,
        }
    }
}
