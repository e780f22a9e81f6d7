//! Product detail page composed from the aggregate product payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route `/product/:id`. One `GET /product/:id` per id; the
//! response feeds every panel. Fetches are generation-ticketed so a slow
//! response for a previous id (or after leaving the page) is dropped.
//!
//! ERROR HANDLING
//! ==============
//! All-or-nothing: any failure shows one message and no panels. Ids that
//! do not parse fail without a request.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use medicare_api::types::{ProductId, ProductPageData};
use medicare_api::{ApiClient, SessionStorage, Transport};

use crate::components::faqs::Faqs;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::product_info::ProductInfo;
use crate::components::reviews::Reviews;
use crate::components::salt_content::SaltContent;
use crate::components::substitutes::Substitutes;
use crate::state::fetch::FetchState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";
pub const INVALID_PRODUCT_MESSAGE: &str = "Product not found.";

/// Parse the `:id` route segment.
///
/// # Errors
///
/// Returns [`INVALID_PRODUCT_MESSAGE`] for a missing, non-numeric or zero id.
pub fn parse_product_id(raw: Option<&str>) -> Result<ProductId, &'static str> {
    raw.and_then(|s| s.trim().parse::<ProductId>().ok())
        .filter(|id| *id > 0)
        .ok_or(INVALID_PRODUCT_MESSAGE)
}

/// Fetch the aggregate for `id`, reducing failures to the page's message.
///
/// # Errors
///
/// Returns [`LOAD_FAILED_MESSAGE`] for any failure; the cause is logged.
pub async fn load_product<T: Transport, S: SessionStorage>(
    client: &ApiClient<T, S>,
    id: ProductId,
) -> Result<ProductPageData, String> {
    client.product(id).await.map_err(|e| {
        log::error!("product {id} load error: {e}");
        LOAD_FAILED_MESSAGE.to_owned()
    })
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let page = RwSignal::new(FetchState::<ProductPageData>::default());

    Effect::new(move || {
        let raw = params.read().get("id");
        let id = match parse_product_id(raw.as_deref()) {
            Ok(id) => id,
            Err(message) => {
                page.update(|p| p.fail(message));
                return;
            }
        };
        let Some(ticket) = page.try_update(FetchState::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = load_product(&crate::net::web_client(), id).await;
            page.try_update(|p| p.resolve(ticket, result));
        });
    });
    on_cleanup(move || {
        page.try_update(FetchState::cancel);
    });

    move || {
        page.with(|state| {
            if state.is_loading() {
                return view! { <div class="loading">"Loading..."</div> }.into_any();
            }
            if let Some(message) = state.error() {
                return view! { <div class="error">{message.to_owned()}</div> }.into_any();
            }
            match state.ready() {
                Some(data) => view! { <ProductView data=data.clone()/> }.into_any(),
                None => ().into_any(),
            }
        })
    }
}

#[component]
fn ProductView(data: ProductPageData) -> impl IntoView {
    let salt_name = data.primary_salt_name().map(str::to_owned);
    let ProductPageData {
        product_details,
        salt_content,
        substitutes,
        faqs,
        reviews,
        ..
    } = data;
    let breadcrumb = product_details.name.clone();

    view! {
        <div class="page-container">
            <Header breadcrumb=breadcrumb/>
            <div class="content-wrapper">
                <main class="main-content">
                    <ProductInfo details=product_details/>
                    <SaltContent salts=salt_content/>
                    <Faqs items=faqs salt_name=salt_name/>
                    <Reviews items=reviews/>
                </main>
                <aside class="sidebar">
                    <Substitutes items=substitutes/>
                </aside>
            </div>
            <Footer/>
        </div>
    }
}
