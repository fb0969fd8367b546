//! Payment card preview model
//!
//! Cards are a client-held UI mock. Validation produces a `SavedCard`
//! that is returned to the caller and never persisted server-side.

use serde::{Deserialize, Serialize};

/// Card brand detected from the leading digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
    Other,
}

impl CardBrand {
    /// Detect the brand from a normalized (digits-only) card number.
    pub fn detect(number: &str) -> Self {
        match number.as_bytes().first() {
            Some(b'4') => CardBrand::Visa,
            Some(b'5') => CardBrand::Mastercard,
            _ => CardBrand::Other,
        }
    }
}

/// Validated card preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCard {
    /// Normalized card number (whitespace stripped)
    pub number: String,
    /// Cardholder name
    pub holder: String,
    pub brand: CardBrand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_detection() {
        assert_eq!(CardBrand::detect("4111111111111111"), CardBrand::Visa);
        assert_eq!(CardBrand::detect("5500000000000004"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect("3782822463100051"), CardBrand::Other);
        assert_eq!(CardBrand::detect(""), CardBrand::Other);
    }
}
