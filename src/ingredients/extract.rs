use regex::Regex;
use tracing::debug;

use crate::product::ProductRecord;

/// Segments this short or shorter after cleaning are dropped
const MIN_SEGMENT_CHARS: usize = 2;

lazy_static::lazy_static! {
    static ref PARENTHESIZED_RE: Regex = Regex::new(r"\(.*?\)").unwrap();
    static ref PERCENT_RE: Regex = Regex::new(r"\d+(?:[.,]\d+)?\s*%").unwrap();
    // "100g flour", "2 eggs", "0.5 l milk"
    static ref LEADING_QUANTITY_RE: Regex =
        Regex::new(r"(?i)^\d+(?:[.,]\d+)?\s*(?:mg|kg|g|ml|cl|dl|lbs|lb|oz|l)?(?:\s+|$)").unwrap();
    // "sugar 10g", "salt 0.5 g"; a number glued to a word ("vitamin B12") is kept
    static ref TRAILING_QUANTITY_RE: Regex =
        Regex::new(r"(?i)(?:^|\s+)\d+(?:[.,]\d+)?\s*(?:mg|kg|g|ml|cl|dl|lbs|lb|oz|l)?$").unwrap();
}

/// Ordered ingredient names for a product.
///
/// Structured entries win when any of them carries a name; otherwise the
/// free-text list is split on commas and cleaned. Missing data gives an
/// empty list.
pub fn extract_ingredients(product: &ProductRecord) -> Vec<String> {
    let structured: Vec<String> = product
        .ingredients
        .iter()
        .filter_map(|entry| entry.display_name())
        .map(str::to_string)
        .collect();

    if !structured.is_empty() {
        debug!(count = structured.len(), "ingredients from structured entries");
        return structured;
    }

    let parsed = match product.ingredients_text.as_deref() {
        Some(text) => parse_ingredients_text(text),
        None => Vec::new(),
    };
    debug!(count = parsed.len(), "ingredients parsed from text");
    parsed
}

/// Split a free-text ingredient list on commas and clean each segment.
pub fn parse_ingredients_text(text: &str) -> Vec<String> {
    text.split(',').filter_map(clean_segment).collect()
}

/// Strip annotations from a single ingredient segment: parenthesized notes,
/// percentages and leading/trailing quantities. Returns `None` when too
/// little is left to be an ingredient name.
pub fn clean_segment(segment: &str) -> Option<String> {
    let cleaned = PARENTHESIZED_RE.replace_all(segment.trim(), "");
    let cleaned = PERCENT_RE.replace_all(&cleaned, "");
    let cleaned = LEADING_QUANTITY_RE.replace(cleaned.trim(), "");
    let cleaned = TRAILING_QUANTITY_RE.replace(cleaned.trim(), "");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() > MIN_SEGMENT_CHARS {
        Some(cleaned.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::IngredientEntry;

    fn product_with_text(text: &str) -> ProductRecord {
        ProductRecord {
            ingredients_text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_structured_entries_preferred() {
        let product = ProductRecord {
            ingredients_text: Some("ignored, text".to_string()),
            ingredients: vec![
                IngredientEntry::Named {
                    text: Some("Rolled oats".to_string()),
                },
                IngredientEntry::Plain("honey".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(extract_ingredients(&product), vec!["Rolled oats", "honey"]);
    }

    #[test]
    fn test_structured_entries_without_names_skipped() {
        let product = ProductRecord {
            ingredients: vec![
                IngredientEntry::Named { text: None },
                IngredientEntry::Named {
                    text: Some("water".to_string()),
                },
            ],
            ..Default::default()
        };
        assert_eq!(extract_ingredients(&product), vec!["water"]);
    }

    #[test]
    fn test_unnamed_structured_entries_fall_back_to_text() {
        let product = ProductRecord {
            ingredients_text: Some("water, sugar".to_string()),
            ingredients: vec![IngredientEntry::Named { text: None }],
            ..Default::default()
        };
        assert_eq!(extract_ingredients(&product), vec!["water", "sugar"]);
    }

    #[test]
    fn test_text_split_and_trimmed() {
        let product = product_with_text(" whole grain oats ,  cane sugar,salt ");
        assert_eq!(
            extract_ingredients(&product),
            vec!["whole grain oats", "cane sugar", "salt"]
        );
    }

    #[test]
    fn test_parentheses_and_percentages_removed() {
        let product = product_with_text("wheat flour (gluten), chocolate 12%, milk powder 1.5%");
        assert_eq!(
            extract_ingredients(&product),
            vec!["wheat flour", "chocolate", "milk powder"]
        );
    }

    #[test]
    fn test_quantities_removed() {
        assert_eq!(clean_segment("100g flour").as_deref(), Some("flour"));
        assert_eq!(clean_segment("2 eggs").as_deref(), Some("eggs"));
        assert_eq!(clean_segment("sugar 10g").as_deref(), Some("sugar"));
        assert_eq!(clean_segment("salt 0.5 g").as_deref(), Some("salt"));
    }

    #[test]
    fn test_embedded_numbers_kept() {
        assert_eq!(clean_segment("vitamin B12").as_deref(), Some("vitamin B12"));
        assert_eq!(clean_segment("E330").as_deref(), Some("E330"));
    }

    #[test]
    fn test_short_and_empty_segments_dropped() {
        let product = product_with_text("water, , ab, 5%, (traces), 250 g, oil");
        assert_eq!(extract_ingredients(&product), vec!["water", "oil"]);
    }

    #[test]
    fn test_no_ingredients_is_empty() {
        assert!(extract_ingredients(&ProductRecord::default()).is_empty());
        assert!(extract_ingredients(&product_with_text("")).is_empty());
    }
}
