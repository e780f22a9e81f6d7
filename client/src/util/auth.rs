//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical redirect behavior, driven by
//! `AuthState::route_decision`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, RouteAccess, RouteDecision};

/// Redirect target for `access`, if the current state calls for one.
pub fn redirect_target(state: &AuthState, access: RouteAccess) -> Option<&'static str> {
    match state.route_decision(access) {
        RouteDecision::Redirect(path) => Some(path),
        RouteDecision::Wait | RouteDecision::Render => None,
    }
}

/// Replace the current route whenever auth state says this route is off-limits.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = auth.with(|state| redirect_target(state, access)) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
