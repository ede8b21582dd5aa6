//! Health scores for packaged food.
//!
//! A product record (as returned by a barcode lookup) is scored against a
//! nine-category rubric: nutrient bands, additive count and ingredient
//! quality. The result carries a 0-100 score, one explanation per evaluated
//! category and the points awarded per category.

pub mod config;
pub mod ingredients;
pub mod product;
pub mod scoring;
pub mod session;

pub use ingredients::{classify_ingredient, extract_ingredients, IngredientClass};
pub use product::{ProductLookup, ProductRecord};
pub use scoring::{calculate_score, ScoreResult, ScoringConfig};
pub use session::Session;
