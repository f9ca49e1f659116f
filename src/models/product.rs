use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A product as the storefront displays it: a name and the localized price
/// string shown next to it. The price stays a display string here; it is
/// parsed only when the product is added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
}

/// Load a product catalog from a JSON file: an array of `{name, price}`
/// objects.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
    Ok(products)
}

/// The built-in storefront catalog, used when no catalog file is configured.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            name: "Dynamic Performance Running Shoes".to_string(),
            price: "Rs. 4,500".to_string(),
        },
        Product {
            name: "Trail Grip Hiking Shoes".to_string(),
            price: "Rs. 3,250".to_string(),
        },
        Product {
            name: "Classic Canvas Sneakers".to_string(),
            price: "Rs. 1,800".to_string(),
        },
        Product {
            name: "Urban Walk Loafers".to_string(),
            price: "Rs. 2,999".to_string(),
        },
    ]
}
