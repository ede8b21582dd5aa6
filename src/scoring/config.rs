use serde::{Deserialize, Serialize};

use super::factors::{Band, Category, QualityRule};

/// Main scoring configuration.
///
/// Describes the rubric: thresholds and max points per category. Every field
/// is optional; anything left out falls back to the built-in rubric
/// (`ScoringConfig::default()`), per field.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   sugar:
///     good: 12
///   fiber:
///     max_points: 12
///   protein:
///     max_points: 8
///   ingredient_quality:
///     negative: ["artificial", "palm oil"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Energy density in kcal/100g (kJ values are converted first)
    #[serde(default)]
    pub energy: Option<BandConfig>,

    #[serde(default)]
    pub sugar: Option<BandConfig>,

    #[serde(default)]
    pub fat: Option<BandConfig>,

    #[serde(default)]
    pub saturated_fat: Option<BandConfig>,

    #[serde(default)]
    pub salt: Option<BandConfig>,

    /// Higher is better: thresholds are minimums
    #[serde(default)]
    pub fiber: Option<BandConfig>,

    /// Higher is better: thresholds are minimums
    #[serde(default)]
    pub protein: Option<BandConfig>,

    /// Thresholds are additive counts
    #[serde(default)]
    pub additives: Option<BandConfig>,

    #[serde(default)]
    pub ingredient_quality: Option<QualityConfig>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            energy: Some(default_band(Category::Energy)),
            sugar: Some(default_band(Category::Sugar)),
            fat: Some(default_band(Category::Fat)),
            saturated_fat: Some(default_band(Category::SaturatedFat)),
            salt: Some(default_band(Category::Salt)),
            fiber: Some(default_band(Category::Fiber)),
            protein: Some(default_band(Category::Protein)),
            additives: Some(default_band(Category::Additives)),
            ingredient_quality: Some(default_quality()),
        }
    }
}

/// Threshold band for a numeric category.
///
/// `excellent`, `good` and `fair` are the inclusive upper bounds of those
/// tiers (lower bounds for fiber and protein); anything past `fair` is Poor.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BandConfig {
    #[serde(default)]
    pub max_points: Option<f64>,
    #[serde(default)]
    pub excellent: Option<f64>,
    #[serde(default)]
    pub good: Option<f64>,
    #[serde(default)]
    pub fair: Option<f64>,
}

/// Ingredient-quality rule: indicator phrases searched in the ingredient text.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QualityConfig {
    #[serde(default)]
    pub max_points: Option<f64>,
    /// Phrases worth +1 each when present
    #[serde(default)]
    pub positive: Option<Vec<String>>,
    /// Phrases worth -1 each when present
    #[serde(default)]
    pub negative: Option<Vec<String>>,
}

pub const DEFAULT_POSITIVE_INDICATORS: [&str; 7] = [
    "whole grain",
    "whole wheat",
    "organic",
    "natural",
    "fresh",
    "fruit",
    "vegetable",
];

pub const DEFAULT_NEGATIVE_INDICATORS: [&str; 6] = [
    "artificial",
    "hydrogenated",
    "high fructose",
    "corn syrup",
    "processed",
    "modified starch",
];

/// Built-in band for a numeric category. Ingredient quality has no band and
/// gets an empty one.
pub fn default_band(category: Category) -> BandConfig {
    let (max_points, excellent, good, fair) = match category {
        Category::Energy => (15.0, 150.0, 250.0, 400.0),
        Category::Sugar => (15.0, 5.0, 10.0, 15.0),
        Category::Fat => (15.0, 3.0, 10.0, 20.0),
        Category::SaturatedFat => (10.0, 1.5, 5.0, 10.0),
        Category::Salt => (10.0, 0.3, 1.5, 3.0),
        Category::Fiber => (10.0, 6.0, 3.0, 1.5),
        Category::Protein => (10.0, 10.0, 5.0, 2.0),
        Category::Additives => (10.0, 0.0, 2.0, 5.0),
        Category::IngredientQuality => return BandConfig::default(),
    };
    BandConfig {
        max_points: Some(max_points),
        excellent: Some(excellent),
        good: Some(good),
        fair: Some(fair),
    }
}

pub fn default_quality() -> QualityConfig {
    QualityConfig {
        max_points: Some(5.0),
        positive: Some(DEFAULT_POSITIVE_INDICATORS.iter().map(|s| s.to_string()).collect()),
        negative: Some(DEFAULT_NEGATIVE_INDICATORS.iter().map(|s| s.to_string()).collect()),
    }
}

impl ScoringConfig {
    /// The configured (possibly partial) band for a numeric category
    pub fn band_config(&self, category: Category) -> Option<&BandConfig> {
        match category {
            Category::Energy => self.energy.as_ref(),
            Category::Sugar => self.sugar.as_ref(),
            Category::Fat => self.fat.as_ref(),
            Category::SaturatedFat => self.saturated_fat.as_ref(),
            Category::Salt => self.salt.as_ref(),
            Category::Fiber => self.fiber.as_ref(),
            Category::Protein => self.protein.as_ref(),
            Category::Additives => self.additives.as_ref(),
            Category::IngredientQuality => None,
        }
    }

    /// Band for a numeric category with unset fields filled from the
    /// built-in rubric. `None` for ingredient quality.
    pub fn band(&self, category: Category) -> Option<Band> {
        if category == Category::IngredientQuality {
            return None;
        }
        let fallback = default_band(category);
        let configured = self.band_config(category);
        let pick = |field: fn(&BandConfig) -> Option<f64>| {
            configured
                .and_then(field)
                .or_else(|| field(&fallback))
                .unwrap_or(0.0)
        };
        Some(Band {
            max_points: pick(|b| b.max_points),
            excellent: pick(|b| b.excellent),
            good: pick(|b| b.good),
            fair: pick(|b| b.fair),
            direction: category.direction(),
        })
    }

    /// Ingredient-quality rule with unset fields filled from the built-in rubric
    pub fn quality(&self) -> QualityRule {
        let fallback = default_quality();
        let configured = self.ingredient_quality.as_ref();
        QualityRule {
            max_points: configured
                .and_then(|q| q.max_points)
                .or(fallback.max_points)
                .unwrap_or(0.0),
            positive: configured
                .and_then(|q| q.positive.clone())
                .or(fallback.positive)
                .unwrap_or_default(),
            negative: configured
                .and_then(|q| q.negative.clone())
                .or(fallback.negative)
                .unwrap_or_default(),
        }
    }

    pub fn max_points(&self, category: Category) -> f64 {
        match self.band(category) {
            Some(band) => band.max_points,
            None => self.quality().max_points,
        }
    }

    /// Sum of max points over all categories (100 for a valid config)
    pub fn total_max_points(&self) -> f64 {
        Category::ALL.iter().map(|c| self.max_points(*c)).sum()
    }
}
