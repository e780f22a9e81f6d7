//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the app shell. Route guards
//! and the session bar read it; the login page and logout action write it.
//!
//! DESIGN
//! ======
//! Three phases only: `Loading` until the stored session has been read once,
//! then `Unauthenticated` or `Authenticated`. Storage is the source of truth;
//! this signal mirrors it for rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use medicare_api::types::UserProfile;
use medicare_api::{ApiClient, SessionStorage, SessionStore, Transport};

/// Authentication phase of the app shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Loading,
    Unauthenticated,
    /// Signed in. `user` is `None` when the stored record is unreadable.
    Authenticated { user: Option<UserProfile> },
}

/// Which side of the login wall a route lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires a session (`/products`, `/product/:id`).
    Protected,
    /// Only for signed-out visitors (`/login`).
    GuestOnly,
    /// `/`: always forwards somewhere.
    Entry,
}

/// What a route should do for the current auth phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session not restored yet; render nothing.
    Wait,
    Render,
    Redirect(&'static str),
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/products";

impl AuthState {
    /// State implied by what is currently persisted.
    pub fn restore<S: SessionStorage>(store: &SessionStore<S>) -> Self {
        if store.is_authenticated() {
            Self::Authenticated { user: store.current_user() }
        } else {
            Self::Unauthenticated
        }
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self::Authenticated { user: Some(user) }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { user } => user.as_ref(),
            _ => None,
        }
    }

    /// Greeting for the session bar, when a user record is available.
    pub fn welcome_text(&self) -> Option<String> {
        self.user().map(|user| format!("Welcome, {}", user.display_name()))
    }

    pub fn route_decision(&self, access: RouteAccess) -> RouteDecision {
        match (self, access) {
            (Self::Loading, _) => RouteDecision::Wait,
            (Self::Authenticated { .. }, RouteAccess::Protected)
            | (Self::Unauthenticated, RouteAccess::GuestOnly) => RouteDecision::Render,
            (Self::Authenticated { .. }, RouteAccess::GuestOnly | RouteAccess::Entry) => {
                RouteDecision::Redirect(HOME_PATH)
            }
            (Self::Unauthenticated, RouteAccess::Protected | RouteAccess::Entry) => {
                RouteDecision::Redirect(LOGIN_PATH)
            }
        }
    }
}

/// Log out through `client` and return the resulting state.
///
/// Always `Unauthenticated`: the local session is cleared by
/// `ApiClient::logout` whether or not the backend call succeeded.
pub async fn sign_out<T: Transport, S: SessionStorage>(client: &ApiClient<T, S>) -> AuthState {
    if let Err(e) = client.logout().await {
        log::error!("logout error: {e}");
    }
    AuthState::Unauthenticated
}
