//! Reactive state slices shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each slice is a plain struct or enum wrapped in `RwSignal` by whoever owns
//! it. Transition logic lives on the types so it tests without a runtime.

pub mod auth;
pub mod cart;
pub mod fetch;
