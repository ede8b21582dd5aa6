use serde::{Deserialize, Serialize};
use std::fmt;

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "whole grain",
    "whole wheat",
    "organic",
    "natural",
    "fresh",
    "fruit",
    "vegetable",
    "vitamin",
    "mineral",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "artificial",
    "preservative",
    "hydrogenated",
    "syrup",
    "processed",
    "additive",
    "color",
    "flavor",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientClass {
    Positive,
    Negative,
    Neutral,
}

impl IngredientClass {
    pub fn label(self) -> &'static str {
        match self {
            IngredientClass::Positive => "positive",
            IngredientClass::Negative => "negative",
            IngredientClass::Neutral => "neutral",
        }
    }
}

impl fmt::Display for IngredientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Classify an ingredient name by keyword, ignoring case.
///
/// Positive keywords are checked first, so "natural flavor" is positive.
pub fn classify_ingredient(name: &str) -> IngredientClass {
    let lower = name.to_lowercase();
    if contains_any(&lower, POSITIVE_KEYWORDS) {
        IngredientClass::Positive
    } else if contains_any(&lower, NEGATIVE_KEYWORDS) {
        IngredientClass::Negative
    } else {
        IngredientClass::Neutral
    }
}

/// Ingredient counts for display.
///
/// `positive` and `negative` are counted independently, so an ingredient
/// carrying keywords from both lists is counted in each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
}

pub fn summarize<S: AsRef<str>>(ingredients: &[S]) -> IngredientSummary {
    let mut summary = IngredientSummary {
        total: ingredients.len(),
        ..Default::default()
    };
    for ingredient in ingredients {
        let lower = ingredient.as_ref().to_lowercase();
        if contains_any(&lower, POSITIVE_KEYWORDS) {
            summary.positive += 1;
        }
        if contains_any(&lower, NEGATIVE_KEYWORDS) {
            summary.negative += 1;
        }
    }
    summary
}
