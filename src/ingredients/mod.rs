pub mod classify;
pub mod extract;

pub use classify::{
    classify_ingredient, summarize, IngredientClass, IngredientSummary, NEGATIVE_KEYWORDS,
    POSITIVE_KEYWORDS,
};
pub use extract::{clean_segment, extract_ingredients, parse_ingredients_text};
