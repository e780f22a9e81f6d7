//! In-memory cart backing the header badge and "Add to Cart" buttons.
//!
//! Not persisted: a reload starts empty.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::BTreeMap;

use medicare_api::types::ProductId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    lines: BTreeMap<ProductId, u32>,
}

impl CartState {
    /// Add `quantity` of `product`. Zero quantities are ignored.
    pub fn add(&mut self, product: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let line = self.lines.entry(product).or_default();
        *line = line.saturating_add(quantity);
    }

    /// Total units across all lines.
    pub fn count(&self) -> u32 {
        self.lines.values().fold(0, |acc, qty| acc.saturating_add(*qty))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
