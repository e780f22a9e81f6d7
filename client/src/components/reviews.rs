//! Customer reviews panel.
//!
//! Shows the first [`COLLAPSED_REVIEW_COUNT`] reviews with a local
//! show-all toggle once there are more.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use leptos::prelude::*;
use medicare_api::types::Review;

pub const NO_REVIEWS_MESSAGE: &str = "No reviews available yet.";
pub const COLLAPSED_REVIEW_COUNT: usize = 3;

pub fn visible_reviews(items: &[Review], show_all: bool) -> &[Review] {
    if show_all {
        items
    } else {
        &items[..items.len().min(COLLAPSED_REVIEW_COUNT)]
    }
}

/// Label for the expand/collapse button; `None` when everything already fits.
pub fn toggle_label(total: usize, show_all: bool) -> Option<String> {
    if total <= COLLAPSED_REVIEW_COUNT {
        return None;
    }
    Some(if show_all {
        "Show Less".to_owned()
    } else {
        format!("Show All {total} Reviews")
    })
}

/// Filled state for each of the five stars.
pub fn star_fill(rating: u8) -> [bool; 5] {
    std::array::from_fn(|i| i < usize::from(rating))
}

pub fn helpful_text(count: Option<u32>) -> Option<String> {
    count
        .filter(|n| *n > 0)
        .map(|n| format!("{n} people found this helpful"))
}

#[component]
pub fn Reviews(items: Vec<Review>) -> impl IntoView {
    if items.is_empty() {
        return view! {
            <section class="card reviews">
                <h2>"Customer Reviews"</h2>
                <p class="no-reviews">{NO_REVIEWS_MESSAGE}</p>
            </section>
        }
        .into_any();
    }

    let show_all = RwSignal::new(false);
    let total = items.len();
    let items = StoredValue::new(items);

    view! {
        <section class="card reviews">
            <h2>"Customer Reviews"</h2>
            <div class="reviews-list">
                {move || {
                    items.with_value(|items| {
                        visible_reviews(items, show_all.get()).iter().cloned().map(review_item).collect_view()
                    })
                }}
            </div>
            {move || {
                toggle_label(total, show_all.get()).map(|label| {
                    view! {
                        <button class="btn-secondary" on:click=move |_| show_all.update(|s| *s = !*s)>
                            {label}
                        </button>
                    }
                })
            }}
        </section>
    }
    .into_any()
}

fn review_item(review: Review) -> impl IntoView {
    let stars = star_fill(review.rating)
        .into_iter()
        .map(|filled| view! { <span class="star" class:filled=filled>"★"</span> })
        .collect_view();
    let reviewer = review.reviewer().to_owned();
    view! {
        <div class="review-item">
            <div class="review-header">
                <div class="reviewer-info">
                    <strong>{reviewer}</strong>
                    {review.verified_purchase.then(|| view! { <span class="verified">"Verified Purchase"</span> })}
                    <div class="rating">
                        {stars}
                        <span class="rating-text">{format!("({}/5)", review.rating)}</span>
                    </div>
                </div>
                {review.date.map(|d| view! { <span class="review-date">{d}</span> })}
            </div>
            {review.title.map(|t| view! { <h4 class="review-title">{t}</h4> })}
            {review.comment.map(|c| view! { <p class="review-text">{c}</p> })}
            {helpful_text(review.helpful_count).map(|text| view! {
                <div class="review-helpful"><span>{text}</span></div>
            })}
        </div>
    }
}
