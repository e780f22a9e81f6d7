//! FAQ accordion for the product's primary salt.
//!
//! At most one entry is open. The open index lives in a signal created by
//! the component, so it resets whenever the panel is rebuilt for new data.

#[cfg(test)]
#[path = "faqs_test.rs"]
mod faqs_test;

use leptos::prelude::*;
use medicare_api::types::Faq;

/// Which FAQ entry, if any, is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Open `index`, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }
}

pub fn faq_heading(salt_name: Option<&str>) -> String {
    match salt_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Frequently Asked Questions about {name}"),
        None => "Frequently Asked Questions".to_owned(),
    }
}

#[component]
pub fn Faqs(items: Vec<Faq>, #[prop(default = None)] salt_name: Option<String>) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }
    let accordion = RwSignal::new(FaqAccordion::default());
    let entries = items
        .into_iter()
        .enumerate()
        .map(|(index, faq)| {
            let Faq { question, answer, .. } = faq;
            let open = move || accordion.get().is_open(index);
            view! {
                <div class="faq-item">
                    <button
                        class="faq-question"
                        class:active=open
                        on:click=move |_| accordion.update(|a| a.toggle(index))
                    >
                        {question}
                        <span class="faq-toggle">{move || if open() { "−" } else { "+" }}</span>
                    </button>
                    <Show when=open>
                        <div class="faq-answer">
                            <p>{answer.clone()}</p>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card faqs">
            <h2>{faq_heading(salt_name.as_deref())}</h2>
            <div class="faq-list">{entries}</div>
        </section>
    }
    .into_any()
}
