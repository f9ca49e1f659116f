use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// One distinct product entry in the cart. The product name is the unique
/// key; the unit price is captured once, when the product is first added,
/// and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Total for this line at the captured unit price.
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

// request dto
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AddItemRequest {
    #[validate(length(min = 1, max = 255, message = "Product name must be 1-255 characters"))]
    #[validate(custom = "validate_product_name")]
    pub name: String,

    /// Price exactly as displayed on the product node, e.g. "Rs. 2,999".
    pub price_text: String,
}

impl AddItemRequest {
    pub fn new(name: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
        }
    }
}

fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Product name is required"));
    }
    Ok(())
}
