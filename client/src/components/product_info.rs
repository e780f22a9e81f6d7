//! Product summary panel: identity, pricing, quantity and usage notes.
//!
//! DESIGN
//! ======
//! Pure function of `ProductDetails` apart from the local quantity counter,
//! which starts at 1 and never drops below it. "Add to Cart" feeds the
//! shared `CartState`.

#[cfg(test)]
#[path = "product_info_test.rs"]
mod product_info_test;

use leptos::prelude::*;
use medicare_api::types::ProductDetails;

use crate::state::cart::CartState;
use crate::util::format::{discount_label, format_price};

pub const PRESCRIPTION_BADGE: &str = "Prescription Required";

pub fn decrement_quantity(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(1)
}

pub fn increment_quantity(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

/// Badges in display order; the prescription badge only when one is required.
pub fn badges(details: &ProductDetails) -> Vec<&'static str> {
    let mut badges = Vec::with_capacity(3);
    if details.prescription_required {
        badges.push(PRESCRIPTION_BADGE);
    }
    badges.extend(["Verified Product", "Fast Delivery"]);
    badges
}

/// Strike-through MRP, only when it is above the selling price.
pub fn original_price(details: &ProductDetails) -> Option<String> {
    (details.mrp > details.price).then(|| format_price(details.mrp))
}

#[component]
pub fn ProductInfo(details: ProductDetails) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let quantity = RwSignal::new(1_u32);

    let product_id = details.id;
    let name = details.name.clone();
    let discount = details.discount_percent().map(discount_label);
    let badge_views = badges(&details)
        .into_iter()
        .map(|badge| {
            let prescription = badge == PRESCRIPTION_BADGE;
            view! { <span class="badge" class:badge-prescription=prescription>{badge}</span> }
        })
        .collect_view();

    let uses = (!details.uses.is_empty()).then(|| {
        let heading = format!("Uses of {name}");
        let items = details.uses.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view();
        view! {
            <div class="info-section">
                <h3>{heading}</h3>
                <ul>{items}</ul>
            </div>
        }
    });
    let how_it_works = details.how_it_works.clone().filter(|text| !text.trim().is_empty()).map(|text| {
        let heading = format!("How {name} Works");
        view! {
            <div class="info-section">
                <h3>{heading}</h3>
                <p>{text}</p>
            </div>
        }
    });
    let side_effects = (!details.side_effects.is_empty()).then(|| {
        let heading = format!("Side Effects of {name}");
        let items = details.side_effects.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view();
        view! {
            <div class="info-section">
                <h3>{heading}</h3>
                <ul>{items}</ul>
            </div>
        }
    });

    view! {
        <section class="product-info">
            <div class="product-header">
                <div class="product-image-container">
                    <div class="product-image" aria-label=name.clone()>"💊"</div>
                    {discount.clone().map(|label| view! { <div class="discount-badge">{label}</div> })}
                </div>
                <div class="product-details">
                    <h1>{name.clone()}</h1>
                    {details.manufacturer.clone().map(|m| view! { <p class="manufacturer">"By " {m}</p> })}
                    {details
                        .description_general
                        .clone()
                        .map(|d| view! { <p class="product-description">{d}</p> })}
                    {details.pack_size.clone().map(|p| view! { <p class="pack-size">{p}</p> })}
                    <div class="product-badges">{badge_views}</div>
                </div>
                <div class="product-pricing">
                    <div class="price-section">
                        <span class="current-price">{format_price(details.price)}</span>
                        {original_price(&details).map(|p| view! { <span class="original-price">{p}</span> })}
                        {discount.map(|label| view! { <div class="discount-percent">{label}</div> })}
                    </div>
                    <div class="quantity-selector">
                        <button class="quantity-btn" on:click=move |_| quantity.update(|q| *q = decrement_quantity(*q))>
                            "−"
                        </button>
                        <span class="quantity-display">{move || quantity.get()}</span>
                        <button class="quantity-btn" on:click=move |_| quantity.update(|q| *q = increment_quantity(*q))>
                            "+"
                        </button>
                    </div>
                    <div class="action-buttons">
                        <button
                            class="btn-primary"
                            on:click=move |_| cart.update(|c| c.add(product_id, quantity.get_untracked()))
                        >
                            "Add to Cart"
                        </button>
                    </div>
                </div>
            </div>
        </section>
        {uses}
        {how_it_works}
        {side_effects}
    }
}
