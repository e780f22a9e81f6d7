//! Sidebar panel listing alternative products.

#[cfg(test)]
#[path = "substitutes_test.rs"]
mod substitutes_test;

use leptos::prelude::*;
use medicare_api::types::Substitute;

use crate::state::cart::CartState;
use crate::util::format::{format_price, product_href};

pub const NO_SUBSTITUTES_MESSAGE: &str = "No alternatives available.";

/// What the panel body shows.
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    Empty(&'static str),
    Cards(&'a [Substitute]),
}

pub fn listing(items: &[Substitute]) -> Listing<'_> {
    if items.is_empty() {
        Listing::Empty(NO_SUBSTITUTES_MESSAGE)
    } else {
        Listing::Cards(items)
    }
}

/// Similarity as a whole percentage, when the backend scored it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn similarity_label(substitute: &Substitute) -> Option<String> {
    let score = substitute.similarity_score.filter(|s| *s > 0.0)?;
    let percent = if score <= 1.0 { score * 100.0 } else { score };
    Some(format!("{}% match", percent.round().min(100.0) as u32))
}

#[component]
pub fn Substitutes(items: Vec<Substitute>) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let body = match listing(&items) {
        Listing::Empty(message) => view! { <p class="no-substitutes">{message}</p> }.into_any(),
        Listing::Cards(cards) => {
            let cards = cards.iter().cloned().map(|substitute| substitute_card(substitute, cart)).collect_view();
            view! { <div class="substitutes-list">{cards}</div> }.into_any()
        }
    };

    view! {
        <section class="alternatives-section">
            <h2>"Alternative Products"</h2>
            {body}
        </section>
    }
}

fn substitute_card(substitute: Substitute, cart: RwSignal<CartState>) -> impl IntoView {
    let id = substitute.id;
    let similarity = similarity_label(&substitute);
    view! {
        <div class="substitute-card">
            <div class="substitute-header">
                <a class="substitute-name" href=product_href(id)>{substitute.name}</a>
                <div class="substitute-price">{format_price(substitute.price)}</div>
            </div>
            {substitute.manufacturer.map(|m| view! { <div class="substitute-manufacturer">{m}</div> })}
            {substitute.strength.map(|s| view! { <div class="substitute-strength">{s}</div> })}
            {similarity.map(|s| view! { <div class="substitute-similarity">{s}</div> })}
            <button class="add-btn" on:click=move |_| cart.update(|c| c.add(id, 1))>
                "+ Add to Cart"
            </button>
        </div>
    }
}
