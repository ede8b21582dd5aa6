use serde::{Deserialize, Serialize};
use std::fmt;

/// One dimension of the health score.
///
/// Declaration order is the rubric order: components, breakdowns and
/// explanations are always reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Energy,
    Sugar,
    Fat,
    SaturatedFat,
    Salt,
    Fiber,
    Protein,
    Additives,
    IngredientQuality,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Energy,
        Category::Sugar,
        Category::Fat,
        Category::SaturatedFat,
        Category::Salt,
        Category::Fiber,
        Category::Protein,
        Category::Additives,
        Category::IngredientQuality,
    ];

    /// Snake-case key, e.g. "saturated_fat"
    pub fn key(self) -> &'static str {
        match self {
            Category::Energy => "energy",
            Category::Sugar => "sugar",
            Category::Fat => "fat",
            Category::SaturatedFat => "saturated_fat",
            Category::Salt => "salt",
            Category::Fiber => "fiber",
            Category::Protein => "protein",
            Category::Additives => "additives",
            Category::IngredientQuality => "ingredient_quality",
        }
    }

    /// Title-case name for display, e.g. "Saturated Fat"
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Energy => "Energy",
            Category::Sugar => "Sugar",
            Category::Fat => "Fat",
            Category::SaturatedFat => "Saturated Fat",
            Category::Salt => "Salt",
            Category::Fiber => "Fiber",
            Category::Protein => "Protein",
            Category::Additives => "Additives",
            Category::IngredientQuality => "Ingredient Quality",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Category::Fiber | Category::Protein => Direction::HigherIsBetter,
            _ => Direction::LowerIsBetter,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// Qualitative tier awarded by a scoring rule, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Excellent, Tier::Good, Tier::Fair, Tier::Poor];

    /// Share of a category's max points awarded at this tier
    pub fn fraction(self) -> f64 {
        match self {
            Tier::Excellent => 1.0,
            Tier::Good => 0.7,
            Tier::Fair => 0.4,
            Tier::Poor => 0.1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Fair => "Fair",
            Tier::Poor => "Poor",
        }
    }

    /// Tier of an ingredient-quality tally (positive minus negative indicators)
    pub fn from_quality_tally(tally: i32) -> Self {
        if tally >= 3 {
            Tier::Excellent
        } else if tally >= 0 {
            Tier::Good
        } else if tally >= -2 {
            Tier::Fair
        } else {
            Tier::Poor
        }
    }

    /// Read the tier back from an explanation string ("Good: ...").
    /// Anything without a recognised heading is treated as Poor.
    pub fn from_explanation(explanation: &str) -> Self {
        let (heading, _) = split_explanation(explanation);
        match heading {
            "Excellent" => Tier::Excellent,
            "Good" => Tier::Good,
            "Fair" => Tier::Fair,
            _ => Tier::Poor,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Split "Heading: detail" at the first colon. Without a colon the whole
/// string is both heading and detail.
pub fn split_explanation(explanation: &str) -> (&str, &str) {
    match explanation.split_once(':') {
        Some((heading, detail)) => (heading.trim(), detail.trim()),
        None => (explanation.trim(), explanation.trim()),
    }
}

/// Resolved thresholds for one numeric category.
///
/// Bounds are inclusive: with `LowerIsBetter` a value equal to `excellent`
/// is Excellent; with `HigherIsBetter` the comparisons flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub max_points: f64,
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub direction: Direction,
}

impl Band {
    pub fn tier(&self, value: f64) -> Tier {
        match self.direction {
            Direction::LowerIsBetter => {
                if value <= self.excellent {
                    Tier::Excellent
                } else if value <= self.good {
                    Tier::Good
                } else if value <= self.fair {
                    Tier::Fair
                } else {
                    Tier::Poor
                }
            }
            Direction::HigherIsBetter => {
                if value >= self.excellent {
                    Tier::Excellent
                } else if value >= self.good {
                    Tier::Good
                } else if value >= self.fair {
                    Tier::Fair
                } else {
                    Tier::Poor
                }
            }
        }
    }

    pub fn points(&self, tier: Tier) -> f64 {
        self.max_points * tier.fraction()
    }
}

/// Resolved ingredient-quality rule.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityRule {
    pub max_points: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl QualityRule {
    /// +1 for every positive indicator found in `text`, -1 for every
    /// negative one. `text` is expected to be lowercased already.
    pub fn tally(&self, text: &str) -> i32 {
        let hits = |phrases: &[String]| {
            phrases
                .iter()
                .filter(|phrase| text.contains(phrase.to_lowercase().as_str()))
                .count() as i32
        };
        hits(&self.positive) - hits(&self.negative)
    }

    /// Points for a tally: a tally of -3 maps to 0, +3 to the maximum,
    /// linear in between.
    pub fn points(&self, tally: i32) -> f64 {
        let max_points = self.max_points.max(0.0);
        (max_points * f64::from(tally + 3) / 6.0).clamp(0.0, max_points)
    }
}
