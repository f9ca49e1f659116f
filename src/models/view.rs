use serde::Serialize;

use crate::models::item::LineItem;
use crate::utils::formatting::format_amount;

/// One row of the rendered cart listing. The index addresses the line for
/// the increase/decrease/delete controls; the line total carries the
/// grouping separators the storefront displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub index: usize,
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// The full display list the cart renders from. Rebuilt from scratch on
/// every mutation; rows appear in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
}

impl CartView {
    /// Pure projection of cart state into the display list.
    pub fn project(items: &[LineItem]) -> Self {
        let lines = items
            .iter()
            .enumerate()
            .map(|(index, item)| CartLineView {
                index,
                name: item.name.clone(),
                quantity: item.quantity,
                line_total: format!("Rs. {}", format_amount(item.line_total())),
            })
            .collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
