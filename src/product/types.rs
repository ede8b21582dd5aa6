use serde::{Deserialize, Deserializer, Serialize};

/// Data source recorded when the lookup collaborator does not name one.
pub const DEFAULT_SOURCE: &str = "Open Food Facts";

/// Placeholder shown for missing product text fields.
pub const UNKNOWN: &str = "Unknown";

/// A single structured ingredient entry as reported by the data source.
///
/// The source sends either an object carrying a display name under `text`
/// (plus fields we don't use) or a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientEntry {
    Plain(String),
    Named {
        #[serde(default, deserialize_with = "lenient_text")]
        text: Option<String>,
    },
    /// Anything else the source sends in the list; never has a name
    Other(serde_json::Value),
}

impl IngredientEntry {
    /// The display name of this entry, if it carries one.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            IngredientEntry::Plain(text) => Some(text.as_str()),
            IngredientEntry::Named { text } => text.as_deref(),
            IngredientEntry::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawText::deserialize(deserializer)? {
        RawText::Text(text) => Some(text),
        RawText::Other(_) => None,
    })
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Nutrient values per 100g.
///
/// Values arrive as numbers or numeric strings. Anything that does not parse
/// to a finite number is treated as unreported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    /// Energy, in kcal or kJ depending on the source (see `scoring::engine`)
    #[serde(rename = "energy_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,

    #[serde(rename = "sugars_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,

    #[serde(rename = "fat_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,

    #[serde(rename = "saturated-fat_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,

    #[serde(rename = "salt_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub salt: Option<f64>,

    #[serde(rename = "fiber_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    #[serde(rename = "proteins_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub proteins: Option<f64>,

    /// Reported for display only; no scoring rule reads it
    #[serde(rename = "carbohydrates_100g", default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => Some(n),
        RawNumber::Text(s) => s.trim().parse::<f64>().ok(),
        RawNumber::Other(_) => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// Product data for one barcode, as produced by the lookup collaborator.
///
/// Field names follow the Open Food Facts product object so a record can be
/// deserialized straight from it. Every field is optional on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "product_name", default)]
    pub name: Option<String>,

    #[serde(rename = "brands", default)]
    pub brand: Option<String>,

    #[serde(rename = "categories", default)]
    pub category: Option<String>,

    /// Free-text ingredient list, e.g. "sugar, wheat flour (gluten), 2% salt"
    #[serde(default)]
    pub ingredients_text: Option<String>,

    /// Structured ingredient entries; takes precedence over `ingredients_text`
    #[serde(rename = "ingredients", default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<IngredientEntry>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Nutrition grade letter reported by the source (a-e)
    #[serde(rename = "nutrition_grade_fr", default)]
    pub nutrition_grade: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nutriments: Nutriments,

    /// Additive identifiers, e.g. "en:e330"
    #[serde(rename = "additives_tags", default, deserialize_with = "null_as_default")]
    pub additives: Vec<String>,

    #[serde(rename = "ingredients_analysis_tags", default, deserialize_with = "null_as_default")]
    pub ingredients_analysis: Vec<String>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(alias = "code", default)]
    pub barcode: Option<String>,
}

impl ProductRecord {
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn display_brand(&self) -> &str {
        non_empty(self.brand.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn display_category(&self) -> &str {
        non_empty(self.category.as_deref()).unwrap_or(UNKNOWN)
    }

    pub fn display_source(&self) -> &str {
        non_empty(self.source.as_deref()).unwrap_or(DEFAULT_SOURCE)
    }

    /// Nutrition grade in upper case, "N/A" when unreported
    pub fn display_grade(&self) -> String {
        non_empty(self.nutrition_grade.as_deref())
            .map(|g| g.to_uppercase())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Lowercased ingredient text, empty when unreported
    pub fn ingredients_text_lower(&self) -> String {
        self.ingredients_text
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Outcome of a barcode lookup, the input of the scoring engine.
///
/// Deserializes from either a product record (optionally carrying
/// `"success": true`) or a failure indicator `{"success": false, "error": ".."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    Found(ProductRecord),
    Failed { error: String },
}

impl ProductLookup {
    pub fn failed(error: impl Into<String>) -> Self {
        ProductLookup::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProductLookup::Found(_))
    }

    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            ProductLookup::Found(record) => Some(record),
            ProductLookup::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProductLookup::Found(_) => None,
            ProductLookup::Failed { error } => Some(error.as_str()),
        }
    }
}

impl From<ProductRecord> for ProductLookup {
    fn from(record: ProductRecord) -> Self {
        ProductLookup::Found(record)
    }
}

#[derive(Deserialize)]
struct RawLookup {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    record: ProductRecord,
}

fn default_success() -> bool {
    true
}

impl<'de> Deserialize<'de> for ProductLookup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawLookup::deserialize(deserializer)?;
        if raw.success {
            Ok(ProductLookup::Found(raw.record))
        } else {
            Ok(ProductLookup::failed(
                raw.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}
