//! Active-ingredient panel. Renders nothing for an empty list.

use leptos::prelude::*;
use medicare_api::types::Salt;

#[component]
pub fn SaltContent(salts: Vec<Salt>) -> impl IntoView {
    if salts.is_empty() {
        return ().into_any();
    }
    let items = salts
        .into_iter()
        .map(|salt| {
            view! {
                <div class="salt-item">
                    <h3>{salt.name}</h3>
                    {salt.strength.map(|s| view! { <p class="strength">{s}</p> })}
                    {salt.description.map(|d| view! { <p class="description">{d}</p> })}
                </div>
            }
        })
        .collect_view();
    view! {
        <section class="card salt-content">
            <h2>"Salt Content"</h2>
            <div class="salt-list">{items}</div>
        </section>
    }
    .into_any()
}
