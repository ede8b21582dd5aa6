use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::config::ScoringConfig;
use super::explain::{describe_band, describe_quality};
use super::factors::{Category, Tier};
use super::grade::HealthGrade;
use crate::product::{ProductLookup, ProductRecord};

/// Explanation returned when there is no product to score
pub const FAILURE_MESSAGE: &str = "Cannot calculate score: Product information not available";

pub const KJ_PER_KCAL: f64 = 4.184;

/// Energy values above this are taken to be kJ rather than kcal
const KJ_DETECTION_THRESHOLD: f64 = 1000.0;

/// Points awarded per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreComponents(BTreeMap<Category, f64>);

impl ScoreComponents {
    /// All nine categories at zero points
    fn zeroed() -> Self {
        Self(Category::ALL.iter().map(|c| (*c, 0.0)).collect())
    }

    /// Points for a category, 0 when it was not scored
    pub fn get(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Unclamped sum of all category points
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Categories and points in rubric order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(c, p)| (*c, *p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How one category contributed to the score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub tier: Tier,
    /// Signal the rule looked at: kcal, g/100g, additive count, or the
    /// ingredient-quality tally
    pub value: f64,
    pub points: f64,
    pub max_points: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Final score, 0-100
    pub score: u8,
    pub explanations: Vec<String>,
    pub components: ScoreComponents,
    /// Categories that produced an explanation, in rubric order
    pub breakdown: Vec<CategoryBreakdown>,
}

impl ScoreResult {
    fn failed() -> Self {
        Self {
            score: 0,
            explanations: vec![FAILURE_MESSAGE.to_string()],
            components: ScoreComponents::default(),
            breakdown: Vec::new(),
        }
    }

    pub fn grade(&self) -> HealthGrade {
        HealthGrade::from_score(self.score)
    }

    /// Sum of component points before clamping and rounding
    pub fn raw_total(&self) -> f64 {
        self.components.total()
    }
}

/// Score a lookup outcome. A failed lookup yields the zero-score sentinel
/// without running any rule.
pub fn calculate_score(lookup: &ProductLookup, config: &ScoringConfig) -> ScoreResult {
    match lookup {
        ProductLookup::Found(product) => score_product(product, config),
        ProductLookup::Failed { error } => {
            warn!(error = %error, "product lookup failed; returning zero score");
            ScoreResult::failed()
        }
    }
}

/// Score a product record against the rubric.
pub fn score_product(product: &ProductRecord, config: &ScoringConfig) -> ScoreResult {
    let mut components = ScoreComponents::zeroed();
    let mut breakdown = Vec::new();

    for category in Category::ALL {
        let contribution = match category {
            Category::IngredientQuality => Some(score_ingredient_quality(product, config)),
            _ => score_band(category, product, config),
        };

        if let Some(contribution) = contribution {
            debug!(
                category = %category,
                value = contribution.value,
                tier = %contribution.tier,
                points = contribution.points,
                "scored category"
            );
            components.0.insert(category, contribution.points);
            breakdown.push(contribution);
        } else {
            debug!(category = %category, "not reported; skipped");
        }
    }

    let total = components.total();
    // Halves go to the even neighbour: 80.5 scores 80, 95.5 scores 96
    let score = total.clamp(0.0, 100.0).round_ties_even() as u8;
    let explanations = breakdown.iter().map(|b| b.explanation.clone()).collect();

    ScoreResult {
        score,
        explanations,
        components,
        breakdown,
    }
}

/// The signal a numeric category is scored on. `None` means unreported.
fn category_value(category: Category, product: &ProductRecord) -> Option<f64> {
    let nutriments = &product.nutriments;
    match category {
        Category::Energy => nutriments.energy.map(energy_kcal),
        Category::Sugar => nutriments.sugars,
        Category::Fat => nutriments.fat,
        Category::SaturatedFat => nutriments.saturated_fat,
        Category::Salt => nutriments.salt,
        Category::Fiber => nutriments.fiber,
        Category::Protein => nutriments.proteins,
        Category::Additives => Some(product.additives.len() as f64),
        Category::IngredientQuality => None,
    }
}

/// Energy in kcal/100g. Values over 1000 are assumed to be kJ.
pub fn energy_kcal(raw: f64) -> f64 {
    if raw > KJ_DETECTION_THRESHOLD {
        raw / KJ_PER_KCAL
    } else {
        raw
    }
}

fn score_band(
    category: Category,
    product: &ProductRecord,
    config: &ScoringConfig,
) -> Option<CategoryBreakdown> {
    let band = config.band(category)?;
    let value = category_value(category, product)?;

    // Zero or negative nutrient values count as unreported, not as "excellent"
    if category != Category::Additives && value <= 0.0 {
        return None;
    }

    let tier = band.tier(value);
    let points = band.points(tier).clamp(0.0, band.max_points.max(0.0));
    Some(CategoryBreakdown {
        category,
        tier,
        value,
        points,
        max_points: band.max_points,
        explanation: describe_band(category, tier, &band),
    })
}

fn score_ingredient_quality(product: &ProductRecord, config: &ScoringConfig) -> CategoryBreakdown {
    let rule = config.quality();
    let tally = rule.tally(&product.ingredients_text_lower());
    let tier = Tier::from_quality_tally(tally);
    CategoryBreakdown {
        category: Category::IngredientQuality,
        tier,
        value: f64::from(tally),
        points: rule.points(tally),
        max_points: rule.max_points,
        explanation: describe_quality(tier),
    }
}
