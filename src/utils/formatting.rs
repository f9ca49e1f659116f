use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::product::Product;
use crate::models::view::CartView;

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Total")]
    line_total: String,
}

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Render a cart view as a terminal table, one row per line item.
pub fn format_cart_table(view: &CartView) -> String {
    if view.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = view
        .lines
        .iter()
        .map(|line| CartTableRow {
            index: line.index,
            name: truncate_name(&line.name),
            quantity: line.quantity,
            line_total: line.line_total.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

/// Render the product catalog as a terminal table.
pub fn format_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .enumerate()
        .map(|(index, product)| ProductTableRow {
            index,
            name: truncate_name(&product.name),
            price: product.price.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

/// Format an amount with thousands grouping, matching the storefront's
/// localized display: integers stay whole, fractional amounts keep two
/// decimals.
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_digits(whole);
    if fraction == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, fraction)
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// Catalog names come from user-supplied JSON, so cut on character
// boundaries, not bytes.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > 40 {
        let head: String = name.chars().take(37).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
