//! Wire DTOs for the storefront REST backend.
//!
//! DESIGN
//! ======
//! Every endpoint gets an explicit result type so malformed responses fail at
//! the boundary with a decode error instead of leaking missing fields into
//! views. The backend serializes absent values as `null`, so list and flag
//! fields go through [`null_as_default`] rather than plain `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend product identifier.
pub type ProductId = u64;

/// Treat both a missing field and an explicit `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================
// Auth
// =============================================================

/// Username (or email) and password submitted to `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A signed-in user as returned by `/login` and `/profile`.
///
/// Only `id` is required. Fields the client does not model are kept in
/// `extra` so a stored profile round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Best available human-readable name.
    #[must_use]
    pub fn display_name(&self) -> String {
        fn present(value: Option<&String>) -> Option<&str> {
            value.map(|s| s.trim()).filter(|s| !s.is_empty())
        }

        if let Some(name) = present(self.name.as_ref()) {
            return name.to_owned();
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        present(self.username.as_ref())
            .or_else(|| present(self.email.as_ref()))
            .map_or_else(|| format!("User {}", self.id), str::to_owned)
    }
}

/// Successful `POST /login` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserProfile,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Successful `POST /register` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserProfile,
}

/// Successful `POST /refresh` body. Backends may or may not rotate the refresh token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRefresh {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub user: UserProfile,
}

// =============================================================
// Product aggregate
// =============================================================

/// Full product record, used both on the detail page and in listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mrp: f64,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub description_general: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uses: Vec<String>,
    #[serde(default)]
    pub how_it_works: Option<String>,
    #[serde(default)]
    pub how_to_use: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub side_effects: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub precautions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interactions: Vec<String>,
    #[serde(default)]
    pub dosage_form: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub pack_size: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prescription_required: bool,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub manufacturing_date: Option<String>,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub storage_conditions: Option<String>,
}

impl ProductDetails {
    /// Discount to advertise, in whole percent.
    ///
    /// Uses the backend's `discount_percentage` when set, otherwise derives it
    /// from `mrp` and `price`. `None` when there is no discount.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn discount_percent(&self) -> Option<u32> {
        let percent = match self.discount_percentage {
            Some(p) if p > 0.0 => p,
            _ if self.mrp > self.price && self.mrp > 0.0 => (self.mrp - self.price) / self.mrp * 100.0,
            _ => return None,
        };
        let rounded = percent.round();
        if (1.0..=100.0).contains(&rounded) {
            Some(rounded as u32)
        } else {
            None
        }
    }
}

/// One active ingredient of a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Salt {
    #[serde(alias = "salt_name")]
    pub name: String,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// An alternative product with a similar composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Substitute {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A customer review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: u8,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified_purchase: bool,
    #[serde(default)]
    pub helpful_count: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Review {
    #[must_use]
    pub fn reviewer(&self) -> &str {
        self.reviewer_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Anonymous")
    }
}

/// Everything the product page needs, fetched in one call to `GET /product/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPageData {
    pub product_details: ProductDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salt_content: Vec<Salt>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub substitutes: Vec<Substitute>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<Faq>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_products: Vec<ProductDetails>,
}

impl ProductPageData {
    /// Name of the first listed salt, used to title the FAQ panel.
    #[must_use]
    pub fn primary_salt_name(&self) -> Option<&str> {
        self.salt_content.first().map(|salt| salt.name.as_str())
    }
}

// =============================================================
// Catalogue
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_prev: bool,
}

/// `GET /products` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<ProductDetails>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `GET /search` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<ProductDetails>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub query: String,
}

/// Filters for `GET /products`. Unset fields are omitted from the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub manufacturer_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub prescription_required: Option<bool>,
}

impl ProductQuery {
    /// Query-string pairs in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key.to_owned(), value));
            }
        };
        push("page", self.page.map(|v| v.to_string()));
        push("per_page", self.per_page.map(|v| v.to_string()));
        push(
            "search",
            self.search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        );
        push("category_id", self.category_id.map(|v| v.to_string()));
        push("manufacturer_id", self.manufacturer_id.map(|v| v.to_string()));
        push("min_price", self.min_price.map(|v| v.to_string()));
        push("max_price", self.max_price.map(|v| v.to_string()));
        push("prescription_required", self.prescription_required.map(|v| v.to_string()));
        pairs
    }
}

/// Page selection for paginated sub-resources (search, reviews).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    #[must_use]
    pub fn to_pairs(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_owned(), per_page.to_string()));
        }
        pairs
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub established_year: Option<i32>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct CategoryEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct ManufacturerEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub manufacturers: Vec<Manufacturer>,
}

// =============================================================
// Reviews
// =============================================================

/// `GET /product/:id/reviews` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `POST /product/:id/reviews` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct ReviewEnvelope {
    pub review: Review,
}

// =============================================================
// Orders
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// `POST /orders` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct OrderEnvelope {
    pub order: Order,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct OrderListEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}

// =============================================================
// Health
// =============================================================

/// `GET /health` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}
