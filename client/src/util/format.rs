//! Display formatting shared by panels and pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use medicare_api::types::ProductId;

/// Rupee price: whole amounts without decimals, otherwise two places.
pub fn format_price(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("₹{amount:.0}")
    } else {
        format!("₹{amount:.2}")
    }
}

pub fn discount_label(percent: u32) -> String {
    format!("{percent}% OFF")
}

pub fn product_href(id: ProductId) -> String {
    format!("/product/{id}")
}

/// Listing route for a free-text search; blank text goes to the plain listing.
pub fn search_href(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return "/products".to_owned();
    }
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("/products?search={encoded}")
}
