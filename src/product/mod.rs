pub mod barcode;
pub mod types;

pub use barcode::{normalize_barcode, BarcodeError};
pub use types::{IngredientEntry, Nutriments, ProductLookup, ProductRecord, DEFAULT_SOURCE, UNKNOWN};
