use super::factors::{Band, Category, Tier};

/// Build the explanation line for a numeric category at a given tier,
/// e.g. "Good: Moderate sugar content (5-10g/100g)".
pub fn describe_band(category: Category, tier: Tier, band: &Band) -> String {
    let detail = match category {
        Category::Additives => describe_additives(tier, band),
        Category::Fiber | Category::Protein => describe_higher_is_better(category, tier, band),
        _ => describe_lower_is_better(category, tier, band),
    };
    format!("{}: {}", tier.label(), detail)
}

/// Explanation line for the ingredient-quality rule
pub fn describe_quality(tier: Tier) -> String {
    let detail = match tier {
        Tier::Excellent => "High-quality ingredients with minimal processing",
        Tier::Good => "Reasonable ingredient quality",
        Tier::Fair => "Some processed ingredients detected",
        Tier::Poor => "Many highly processed ingredients",
    };
    format!("{}: {}", tier.label(), detail)
}

/// Subject of the sentence and the unit appended to thresholds
fn subject(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Energy => ("energy density", " kcal/100g"),
        Category::Sugar => ("sugar content", "g/100g"),
        Category::Fat => ("fat content", "g/100g"),
        Category::SaturatedFat => ("saturated fat", "g/100g"),
        Category::Salt => ("salt content", "g/100g"),
        Category::Fiber => ("fiber content", "g/100g"),
        Category::Protein => ("protein content", "g/100g"),
        Category::Additives | Category::IngredientQuality => ("", ""),
    }
}

fn describe_lower_is_better(category: Category, tier: Tier, band: &Band) -> String {
    let (noun, unit) = subject(category);
    match tier {
        Tier::Excellent => format!("Low {} (<{}{})", noun, band.excellent, unit),
        Tier::Good => format!("Moderate {} ({}-{}{})", noun, band.excellent, band.good, unit),
        Tier::Fair => format!("High {} ({}-{}{})", noun, band.good, band.fair, unit),
        Tier::Poor => format!("Very high {} (>{}{})", noun, band.fair, unit),
    }
}

fn describe_higher_is_better(category: Category, tier: Tier, band: &Band) -> String {
    let (noun, unit) = subject(category);
    match tier {
        Tier::Excellent => format!("High {} (>{}{})", noun, band.excellent, unit),
        Tier::Good => format!("Moderate {} ({}-{}{})", noun, band.good, band.excellent, unit),
        Tier::Fair => format!("Low {} ({}-{}{})", noun, band.fair, band.good, unit),
        Tier::Poor => format!("Very low {} (<{}{})", noun, band.fair, unit),
    }
}

fn describe_additives(tier: Tier, band: &Band) -> String {
    match tier {
        Tier::Excellent if band.excellent <= 0.0 => "No additives detected".to_string(),
        Tier::Excellent => format!("Very few additives (0-{})", band.excellent),
        Tier::Good => format!("Few additives ({}-{})", band.excellent + 1.0, band.good),
        Tier::Fair => format!("Moderate additives ({}-{})", band.good + 1.0, band.fair),
        Tier::Poor => format!("Many additives (>{})", band.fair),
    }
}
