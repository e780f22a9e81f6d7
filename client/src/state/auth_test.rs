use serde_json::json;

use super::*;
use medicare_api::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use medicare_api::{MemoryStorage, StubTransport};

fn user() -> UserProfile {
    serde_json::from_value(json!({ "id": 1, "name": "X" })).unwrap()
}

fn signed_in_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    storage.set(REFRESH_TOKEN_KEY, "ref").unwrap();
    storage.set(USER_KEY, r#"{"id":1,"name":"X"}"#).unwrap();
    storage
}

// =============================================================
// restore
// =============================================================

#[test]
fn default_state_is_loading() {
    assert!(AuthState::default().is_loading());
}

#[test]
fn restore_without_session_is_unauthenticated() {
    let storage = MemoryStorage::new();
    assert_eq!(AuthState::restore(&SessionStore::new(&storage)), AuthState::Unauthenticated);
}

#[test]
fn restore_with_session_is_authenticated_with_user() {
    let storage = signed_in_storage();
    assert_eq!(AuthState::restore(&SessionStore::new(&storage)), AuthState::signed_in(user()));
}

#[test]
fn restore_with_malformed_user_keeps_session_without_profile() {
    let storage = signed_in_storage();
    storage.set(USER_KEY, "{not json").unwrap();
    let state = AuthState::restore(&SessionStore::new(&storage));
    assert_eq!(state, AuthState::Authenticated { user: None });
    assert_eq!(state.welcome_text(), None);
}

#[test]
fn welcome_text_uses_display_name() {
    assert_eq!(AuthState::signed_in(user()).welcome_text().as_deref(), Some("Welcome, X"));
    assert_eq!(AuthState::Unauthenticated.welcome_text(), None);
}

// =============================================================
// route_decision
// =============================================================

#[test]
fn loading_waits_on_every_route() {
    for access in [RouteAccess::Protected, RouteAccess::GuestOnly, RouteAccess::Entry] {
        assert_eq!(AuthState::Loading.route_decision(access), RouteDecision::Wait);
    }
}

#[test]
fn unauthenticated_routes() {
    let state = AuthState::Unauthenticated;
    assert_eq!(state.route_decision(RouteAccess::Protected), RouteDecision::Redirect(LOGIN_PATH));
    assert_eq!(state.route_decision(RouteAccess::GuestOnly), RouteDecision::Render);
    assert_eq!(state.route_decision(RouteAccess::Entry), RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn authenticated_routes() {
    let state = AuthState::Authenticated { user: None };
    assert_eq!(state.route_decision(RouteAccess::Protected), RouteDecision::Render);
    assert_eq!(state.route_decision(RouteAccess::GuestOnly), RouteDecision::Redirect(HOME_PATH));
    assert_eq!(state.route_decision(RouteAccess::Entry), RouteDecision::Redirect(HOME_PATH));
}

// =============================================================
// sign_out
// =============================================================

#[tokio::test]
async fn sign_out_after_network_error_clears_session() {
    let storage = signed_in_storage();
    let client = ApiClient::new(StubTransport::new().fail("offline"), storage.clone());

    let state = sign_out(&client).await;

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(!client.session().is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn sign_out_after_success_clears_session() {
    let storage = signed_in_storage();
    let transport = StubTransport::new().respond(200, &json!({ "message": "ok" }));
    let client = ApiClient::new(transport, storage.clone());

    assert_eq!(sign_out(&client).await, AuthState::Unauthenticated);
    assert!(storage.is_empty());
}
