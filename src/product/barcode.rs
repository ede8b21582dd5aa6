use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarcodeError {
    #[error("Invalid barcode format")]
    Invalid,
}

/// Normalize user-entered barcode text to its digits.
///
/// Separators and stray characters are dropped ("0 12345-67890 5" becomes
/// "012345678905"). Input without a single digit is rejected.
pub fn normalize_barcode(input: &str) -> Result<String, BarcodeError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(BarcodeError::Invalid);
    }
    Ok(digits)
}
