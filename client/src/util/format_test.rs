use super::*;

#[test]
fn format_price_drops_zero_fraction() {
    assert_eq!(format_price(34.0), "₹34");
    assert_eq!(format_price(0.0), "₹0");
}

#[test]
fn format_price_keeps_two_decimals_otherwise() {
    assert_eq!(format_price(34.5), "₹34.50");
    assert_eq!(format_price(129.99), "₹129.99");
}

#[test]
fn discount_label_formats_percent() {
    assert_eq!(discount_label(15), "15% OFF");
}

#[test]
fn product_href_uses_id() {
    assert_eq!(product_href(42), "/product/42");
}

#[test]
fn search_href_encodes_query() {
    assert_eq!(search_href(" udiliv 300mg "), "/products?search=udiliv+300mg");
    assert_eq!(search_href("a&b"), "/products?search=a%26b");
}

#[test]
fn search_href_blank_goes_to_listing() {
    assert_eq!(search_href("   "), "/products");
}
