//! Storefront header: brand, catalogue search, cart badge and breadcrumb.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::cart::CartState;
use crate::util::format::search_href;

#[component]
pub fn Header(
    /// Last breadcrumb segment, usually the product name.
    #[prop(optional, into)]
    breadcrumb: Option<String>,
    /// Pre-filled search text.
    #[prop(optional, into)]
    search: Option<String>,
) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();
    let query = RwSignal::new(search.unwrap_or_default());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&search_href(&query.get_untracked()), NavigateOptions::default());
    };

    view! {
        <header class="header">
            <div class="container">
                <a href="/products" class="logo">"MediCare"</a>
                <form class="search-bar" on:submit=on_search>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search for medicines, health products..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>
                <div class="header-actions">
                    <span class="cart-icon" title="Cart">
                        "🛒"
                        <Show when=move || !cart.with(CartState::is_empty)>
                            <span class="cart-badge">{move || cart.with(CartState::count)}</span>
                        </Show>
                    </span>
                </div>
            </div>
        </header>
        <nav class="breadcrumb">
            <div class="container">
                <ul class="breadcrumb-list">
                    <li class="breadcrumb-item"><a href="/">"Home"</a></li>
                    <li class="breadcrumb-item"><a href="/products">"Medicines"</a></li>
                    {breadcrumb.map(|label| view! { <li class="breadcrumb-item">{label}</li> })}
                </ul>
            </div>
        </nav>
    }
}
