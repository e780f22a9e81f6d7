//! One method per backend operation.
//!
//! ERROR HANDLING
//! ==============
//! Every call maps to exactly one request. Transport failures become
//! `ApiError::Network`, non-2xx statuses become `ApiError::Http` with the
//! backend's `error`/`message` text, and 2xx bodies that don't match the
//! endpoint's type become `ApiError::Decode`. Nothing is retried.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, backend_message};
use crate::session::{Session, SessionStore};
use crate::storage::SessionStorage;
use crate::transport::{HttpRequest, Transport};
use crate::types::{
    Category, CategoryEnvelope, Credentials, HealthStatus, LoginResponse, Manufacturer, ManufacturerEnvelope,
    NewOrder, NewReview, Order, OrderEnvelope, OrderListEnvelope, PageQuery, ProductId, ProductList,
    ProductPageData, ProductQuery, ProfileEnvelope, RegisterResponse, Registration, Review, ReviewEnvelope,
    ReviewList, SearchResults, TokenRefresh, UserProfile,
};

fn product_endpoint(id: ProductId) -> String {
    format!("/product/{id}")
}

fn product_reviews_endpoint(id: ProductId) -> String {
    format!("/product/{id}/reviews")
}

/// REST client bound to a transport and a session store.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    session: SessionStore<S>,
}

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    pub fn new(transport: T, storage: S) -> Self {
        Self {
            transport,
            session: SessionStore::new(storage),
        }
    }

    /// Session store backing this client's bearer tokens.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `POST /login`. Does not touch the session store; see [`Self::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = HttpRequest::post("/login").with_json(credentials)?;
        self.execute("login", request).await
    }

    /// Log in and persist the returned session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the login call fails or the session cannot be
    /// stored. Nothing is persisted on failure.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<UserProfile, ApiError> {
        let response = self.login(credentials).await?;
        let session = Session::from(response);
        self.session.save(&session)?;
        log::info!("signed in as user {}", session.user.id);
        Ok(session.user)
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        let request = HttpRequest::post("/register").with_json(registration)?;
        self.execute("register", request).await
    }

    /// `POST /refresh` with the stored refresh token; persists the new tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP, decoding or storage failure.
    pub async fn refresh(&self) -> Result<TokenRefresh, ApiError> {
        let request = HttpRequest::post("/refresh").with_bearer(self.session.refresh_token());
        let tokens: TokenRefresh = self.execute("refresh", request).await?;
        self.session.save_tokens(&tokens)?;
        Ok(tokens)
    }

    /// `POST /logout`. Local session data is cleared whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request failed; the session is already
    /// cleared by then.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.authorized(HttpRequest::post("/logout"));
        let outcome = self.execute_ignoring_body("logout", request).await;
        self.session.clear();
        outcome.map(drop)
    }

    /// `GET /profile`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let request = self.authorized(HttpRequest::get("/profile"));
        let envelope: ProfileEnvelope = self.execute("profile", request).await?;
        Ok(envelope.user)
    }

    // =============================================================
    // Catalogue
    // =============================================================

    /// `GET /product/:id` aggregate for the product page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn product(&self, id: ProductId) -> Result<ProductPageData, ApiError> {
        let request = self.authorized(HttpRequest::get(product_endpoint(id)));
        self.execute("product", request).await
    }

    /// `GET /products` with optional filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn products(&self, query: &ProductQuery) -> Result<ProductList, ApiError> {
        let request = self.authorized(HttpRequest::get("/products").with_query(query.to_pairs()));
        self.execute("products", request).await
    }

    /// `GET /search?q=…`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn search(&self, text: &str, page: PageQuery) -> Result<SearchResults, ApiError> {
        let mut query = vec![("q".to_owned(), text.to_owned())];
        query.extend(page.to_pairs());
        let request = self.authorized(HttpRequest::get("/search").with_query(query));
        self.execute("search", request).await
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let request = self.authorized(HttpRequest::get("/categories"));
        let envelope: CategoryEnvelope = self.execute("categories", request).await?;
        Ok(envelope.categories)
    }

    /// `GET /manufacturers`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn manufacturers(&self) -> Result<Vec<Manufacturer>, ApiError> {
        let request = self.authorized(HttpRequest::get("/manufacturers"));
        let envelope: ManufacturerEnvelope = self.execute("manufacturers", request).await?;
        Ok(envelope.manufacturers)
    }

    // =============================================================
    // Reviews
    // =============================================================

    /// `GET /product/:id/reviews`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn product_reviews(&self, id: ProductId, page: PageQuery) -> Result<ReviewList, ApiError> {
        let request =
            self.authorized(HttpRequest::get(product_reviews_endpoint(id)).with_query(page.to_pairs()));
        self.execute("product reviews", request).await
    }

    /// `POST /product/:id/reviews`, returning the created review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn add_review(&self, id: ProductId, review: &NewReview) -> Result<Review, ApiError> {
        let request = self.authorized(HttpRequest::post(product_reviews_endpoint(id)).with_json(review)?);
        let envelope: ReviewEnvelope = self.execute("add review", request).await?;
        Ok(envelope.review)
    }

    // =============================================================
    // Orders
    // =============================================================

    /// `POST /orders`, returning the created order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let request = self.authorized(HttpRequest::post("/orders").with_json(order)?);
        let envelope: OrderEnvelope = self.execute("create order", request).await?;
        Ok(envelope.order)
    }

    /// `GET /orders` for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        let request = self.authorized(HttpRequest::get("/orders"));
        let envelope: OrderListEnvelope = self.execute("orders", request).await?;
        Ok(envelope.orders)
    }

    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network, HTTP or decoding failure.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.execute("health", HttpRequest::get("/health")).await
    }

    // =============================================================
    // Plumbing
    // =============================================================

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request.with_bearer(self.session.access_token())
    }

    async fn execute<R: DeserializeOwned>(&self, endpoint: &'static str, request: HttpRequest) -> Result<R, ApiError> {
        let body = self.execute_ignoring_body(endpoint, request).await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("{endpoint} response did not decode: {e}");
            ApiError::Decode {
                endpoint,
                reason: e.to_string(),
            }
        })
    }

    /// Send `request` and return the 2xx body text without decoding it.
    async fn execute_ignoring_body(&self, endpoint: &'static str, request: HttpRequest) -> Result<String, ApiError> {
        log::debug!("{endpoint}: {}", request.describe());
        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{endpoint} error: {e}");
            ApiError::Network(e)
        })?;
        if !response.is_success() {
            let error = ApiError::Http {
                status: response.status,
                message: backend_message(&response.body),
            };
            log::error!("{endpoint} error ({}): {error}", response.status);
            return Err(error);
        }
        Ok(response.body)
    }
}
