use nutriscan::ingredients::{classify_ingredient, extract_ingredients, IngredientClass};
use nutriscan::product::{Nutriments, ProductLookup, ProductRecord};
use nutriscan::scoring::{calculate_score, Category, ScoringConfig, Tier, FAILURE_MESSAGE};
use proptest::prelude::*;

fn nutrient() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(0.0)),
        (-10.0f64..3000.0).prop_map(Some),
    ]
}

fn nutriments() -> impl Strategy<Value = Nutriments> {
    (
        nutrient(),
        nutrient(),
        nutrient(),
        nutrient(),
        nutrient(),
        nutrient(),
        nutrient(),
    )
        .prop_map(|(energy, sugars, fat, saturated_fat, salt, fiber, proteins)| Nutriments {
            energy,
            sugars,
            fat,
            saturated_fat,
            salt,
            fiber,
            proteins,
            carbohydrates: None,
        })
}

fn product() -> impl Strategy<Value = ProductRecord> {
    let words = prop::sample::select(vec![
        "organic",
        "whole grain",
        "fruit",
        "corn syrup",
        "artificial",
        "hydrogenated",
        "water",
        "salt",
    ]);
    (
        nutriments(),
        prop::collection::vec("en:e[0-9]{3}", 0..12),
        prop::collection::vec(words, 0..8),
    )
        .prop_map(|(nutriments, additives, words)| ProductRecord {
            ingredients_text: Some(words.join(", ")),
            nutriments,
            additives,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn score_is_rounded_clamped_sum(product in product()) {
        let result = calculate_score(&ProductLookup::Found(product), &ScoringConfig::default());
        let expected = result.components.total().clamp(0.0, 100.0).round_ties_even() as u8;
        prop_assert_eq!(result.score, expected);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn components_within_bounds(product in product()) {
        let config = ScoringConfig::default();
        let result = calculate_score(&ProductLookup::Found(product), &config);
        for (category, points) in result.components.iter() {
            let max = config.max_points(category);
            prop_assert!(
                (0.0..=max).contains(&points),
                "{} awarded {} of {}", category, points, max
            );
        }
    }

    #[test]
    fn explanations_follow_rubric_order(product in product()) {
        let result = calculate_score(&ProductLookup::Found(product), &ScoringConfig::default());
        let categories: Vec<Category> = result.breakdown.iter().map(|b| b.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        prop_assert_eq!(&categories, &sorted);
        prop_assert_eq!(result.explanations.len(), result.breakdown.len());
        for entry in &result.breakdown {
            prop_assert_eq!(Tier::from_explanation(&entry.explanation), entry.tier);
        }
    }

    #[test]
    fn unreported_nutrients_score_zero(product in product()) {
        let result = calculate_score(&ProductLookup::Found(product.clone()), &ScoringConfig::default());
        let n = &product.nutriments;
        let reported = [
            (Category::Energy, n.energy),
            (Category::Sugar, n.sugars),
            (Category::Fat, n.fat),
            (Category::SaturatedFat, n.saturated_fat),
            (Category::Salt, n.salt),
            (Category::Fiber, n.fiber),
            (Category::Protein, n.proteins),
        ];
        for (category, value) in reported {
            if value.map_or(true, |v| v <= 0.0) {
                prop_assert_eq!(result.components.get(category), 0.0);
                prop_assert!(result.breakdown.iter().all(|b| b.category != category));
            }
        }
    }

    #[test]
    fn scoring_is_idempotent(product in product()) {
        let lookup = ProductLookup::Found(product);
        let config = ScoringConfig::default();
        prop_assert_eq!(calculate_score(&lookup, &config), calculate_score(&lookup, &config));
    }

    #[test]
    fn failed_lookup_is_sentinel(error in ".{0,40}") {
        let result = calculate_score(&ProductLookup::failed(error), &ScoringConfig::default());
        prop_assert_eq!(result.score, 0);
        prop_assert_eq!(result.explanations, vec![FAILURE_MESSAGE.to_string()]);
        prop_assert!(result.components.is_empty());
    }

    #[test]
    fn extracted_segments_are_trimmed(text in "[a-z0-9 ,%()]{0,80}") {
        let product = ProductRecord {
            ingredients_text: Some(text),
            ..Default::default()
        };
        for name in extract_ingredients(&product) {
            prop_assert!(!name.contains(','));
            prop_assert_eq!(name.trim(), name.as_str());
            prop_assert!(name.chars().count() > 2);
        }
    }

    #[test]
    fn classification_ignores_case(name in "[a-zA-Z ]{0,30}") {
        prop_assert_eq!(
            classify_ingredient(&name),
            classify_ingredient(&name.to_uppercase())
        );
    }
}

#[test]
fn natural_flavor_is_positive() {
    assert_eq!(classify_ingredient("Natural Flavor"), IngredientClass::Positive);
}
