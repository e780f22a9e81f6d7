//! Product listing with search, category filter and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route `/products`, the post-login landing page. The header
//! search routes here with `?search=`. Results use the same generation
//! tickets as the detail page, so rapid filter changes never show an older
//! page's results.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use medicare_api::types::{Category, Pagination, ProductDetails, ProductList, ProductQuery};
use medicare_api::{ApiClient, SessionStorage, Transport};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::product::LOAD_FAILED_MESSAGE;
use crate::state::fetch::FetchState;
use crate::util::format::{discount_label, format_price, product_href};

pub const PAGE_SIZE: u32 = 12;
pub const NO_PRODUCTS_MESSAGE: &str = "No products match your search.";

/// Filters currently applied to the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingFilter {
    pub page: u32,
    pub search: String,
    pub category_id: Option<i64>,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            category_id: None,
        }
    }
}

impl ListingFilter {
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            page: Some(self.page),
            per_page: Some(PAGE_SIZE),
            search: Some(self.search.clone()),
            category_id: self.category_id,
            ..ProductQuery::default()
        }
    }

    /// New search text; results restart at page 1.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
            category_id: self.category_id,
        }
    }

    /// New category (`None` for all); results restart at page 1.
    pub fn with_category(&self, category_id: Option<i64>) -> Self {
        Self {
            page: 1,
            search: self.search.clone(),
            category_id,
        }
    }

    pub fn next_page(&self, pagination: &Pagination) -> Option<Self> {
        pagination.has_next.then(|| Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        })
    }

    pub fn prev_page(&self, pagination: &Pagination) -> Option<Self> {
        (pagination.has_prev && self.page > 1).then(|| Self {
            page: self.page - 1,
            ..self.clone()
        })
    }
}

/// Parse the category `<select>` value; empty or junk means "all".
pub fn parse_category(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub fn page_summary(pagination: &Pagination) -> String {
    format!(
        "Page {} of {} ({} products)",
        pagination.page,
        pagination.pages.max(1),
        pagination.total
    )
}

/// Fetch one listing page.
///
/// # Errors
///
/// Returns the page's load-failure message; the cause is logged.
pub async fn load_listing<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    filter: &ListingFilter,
) -> Result<ProductList, String> {
    client.products(&filter.to_query()).await.map_err(|e| {
        log::error!("product listing error: {e}");
        LOAD_FAILED_MESSAGE.to_owned()
    })
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let query = use_query_map();
    let initial_search = query.with_untracked(|q| q.get("search")).unwrap_or_default();
    let filter = RwSignal::new(ListingFilter::default().with_search(initial_search.clone()));
    let listing = RwSignal::new(FetchState::<ProductList>::default());
    let categories = RwSignal::new(Vec::<Category>::new());

    // A new header search while already on this page only changes ?search=.
    Effect::new(move || {
        let search = query.read().get("search").unwrap_or_default();
        filter.maybe_update(|f| {
            if f.search == search {
                return false;
            }
            *f = f.with_search(search);
            true
        });
    });

    Effect::new(move || {
        let current = filter.get();
        let Some(ticket) = listing.try_update(FetchState::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = load_listing(&crate::net::web_client(), &current).await;
            listing.try_update(|l| l.resolve(ticket, result));
        });
    });

    leptos::task::spawn_local(async move {
        match crate::net::web_client().categories().await {
            Ok(list) => {
                categories.try_set(list);
            }
            Err(e) => log::warn!("categories unavailable: {e}"),
        }
    });

    on_cleanup(move || {
        listing.try_update(FetchState::cancel);
    });

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
            .collect_view()
    };

    let results = move || {
        listing.with(|state| {
            if state.is_loading() {
                return view! { <div class="loading">"Loading..."</div> }.into_any();
            }
            if let Some(message) = state.error() {
                return view! { <div class="error">{message.to_owned()}</div> }.into_any();
            }
            let Some(list) = state.ready() else {
                return ().into_any();
            };
            if list.products.is_empty() {
                return view! { <p class="no-products">{NO_PRODUCTS_MESSAGE}</p> }.into_any();
            }
            let cards = list.products.iter().cloned().map(product_card).collect_view();
            let pagination = list.pagination.clone();
            let prev = filter.with_untracked(|f| f.prev_page(&pagination));
            let next = filter.with_untracked(|f| f.next_page(&pagination));
            let (has_prev, has_next) = (prev.is_some(), next.is_some());
            view! {
                <div class="product-grid">{cards}</div>
                <div class="pagination">
                    <button
                        class="btn-secondary"
                        disabled=!has_prev
                        on:click=move |_| {
                            if let Some(p) = prev.clone() {
                                filter.set(p);
                            }
                        }
                    >
                        "Previous"
                    </button>
                    <span class="page-summary">{page_summary(&pagination)}</span>
                    <button
                        class="btn-secondary"
                        disabled=!has_next
                        on:click=move |_| {
                            if let Some(n) = next.clone() {
                                filter.set(n);
                            }
                        }
                    >
                        "Next"
                    </button>
                </div>
            }
            .into_any()
        })
    };

    view! {
        <div class="page-container">
            <Header search=initial_search/>
            <div class="content-wrapper">
                <main class="main-content">
                    <div class="listing-filters">
                        <select
                            class="category-filter"
                            on:change=move |ev| {
                                let category = parse_category(&event_target_value(&ev));
                                filter.update(|f| *f = f.with_category(category));
                            }
                        >
                            <option value="">"All categories"</option>
                            {category_options}
                        </select>
                        <Show when=move || filter.with(|f| !f.search.trim().is_empty())>
                            <span class="search-summary">
                                "Results for \"" {move || filter.with(|f| f.search.clone())} "\""
                            </span>
                        </Show>
                    </div>
                    {results}
                </main>
            </div>
            <Footer/>
        </div>
    }
}

fn product_card(product: ProductDetails) -> impl IntoView {
    let discount = product.discount_percent().map(discount_label);
    view! {
        <a class="product-card" href=product_href(product.id)>
            <div class="product-card__name">{product.name}</div>
            {product.manufacturer.map(|m| view! { <div class="product-card__manufacturer">{m}</div> })}
            <div class="product-card__price">
                <span class="current-price">{format_price(product.price)}</span>
                {discount.map(|d| view! { <span class="discount-percent">{d}</span> })}
            </div>
            {product
                .prescription_required
                .then(|| view! { <span class="badge badge-prescription">"Rx"</span> })}
        </a>
    }
}
