use serde_json::json;

use super::*;
use medicare_api::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use medicare_api::{MemoryStorage, StubTransport};

fn filled(username: &str, password: &str) -> LoginForm {
    LoginForm {
        username: username.to_owned(),
        password: password.to_owned(),
        ..LoginForm::default()
    }
}

// =============================================================
// Form state
// =============================================================

#[test]
fn empty_password_blocks_submit_for_any_username() {
    for username in ["", "testuser", "test@example.com", " ", "ü"] {
        let mut form = filled(username, "");
        assert!(!form.can_submit(), "username={username:?}");
        assert_eq!(form.start_submit(), None);
        assert!(!form.busy);
    }
}

#[test]
fn empty_username_blocks_submit() {
    assert!(!filled("", "secret").can_submit());
}

#[test]
fn busy_form_blocks_submit() {
    let mut form = filled("testuser", "secret");
    assert!(form.start_submit().is_some());
    assert!(form.busy);
    assert!(!form.can_submit());
    assert_eq!(form.start_submit(), None);
}

#[test]
fn start_submit_hands_out_credentials_verbatim() {
    let mut form = filled("testuser", " pass ");
    assert_eq!(
        form.start_submit(),
        Some(Credentials { username: "testuser".to_owned(), password: " pass ".to_owned() })
    );
}

#[test]
fn typing_clears_error() {
    let mut form = filled("testuser", "secret");
    form.finish_submit(Some("Invalid credentials".to_owned()));
    assert!(!form.busy);

    form.set_password("other".to_owned());
    assert_eq!(form.error, None);

    form.error = Some("again".to_owned());
    form.set_username("x".to_owned());
    assert_eq!(form.error, None);
}

#[test]
fn fill_demo_uses_demo_account() {
    let mut form = LoginForm::default();
    form.fill_demo();
    assert_eq!(form.username, DEMO_USERNAME);
    assert_eq!(form.password, DEMO_PASSWORD);
    assert!(form.can_submit());
}

// =============================================================
// submit_login
// =============================================================

#[tokio::test]
async fn successful_login_persists_session_and_returns_user() {
    let transport = StubTransport::new()
        .respond(200, &json!({ "access_token": "a", "refresh_token": "b", "user": { "id": 1, "name": "X" } }));
    let storage = MemoryStorage::new();
    let client = ApiClient::new(transport, storage.clone());
    let credentials = Credentials { username: "testuser".to_owned(), password: "password123".to_owned() };

    let user = submit_login(&client, &credentials).await.unwrap();

    assert_eq!(serde_json::to_value(&user).unwrap(), json!({ "id": 1, "name": "X" }));
    let entries = storage.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[ACCESS_TOKEN_KEY], "a");
    assert_eq!(entries[REFRESH_TOKEN_KEY], "b");
    assert_eq!(serde_json::from_str::<serde_json::Value>(&entries[USER_KEY]).unwrap(), json!({ "id": 1, "name": "X" }));
}

#[tokio::test]
async fn rejected_login_shows_backend_error() {
    let transport = StubTransport::new().respond(401, &json!({ "error": "Invalid username or password" }));
    let client = ApiClient::new(transport, MemoryStorage::new());
    let credentials = Credentials { username: "testuser".to_owned(), password: "nope".to_owned() };

    let message = submit_login(&client, &credentials).await.unwrap_err();

    assert_eq!(message, "Invalid username or password");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn rejected_login_without_text_uses_fallback() {
    let transport = StubTransport::new().respond(500, &json!({}));
    let client = ApiClient::new(transport, MemoryStorage::new());
    let credentials = Credentials { username: "testuser".to_owned(), password: "x".to_owned() };

    assert_eq!(submit_login(&client, &credentials).await.unwrap_err(), LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn unreachable_backend_shows_network_message() {
    let client = ApiClient::new(StubTransport::new().fail("offline"), MemoryStorage::new());
    let credentials = Credentials { username: "testuser".to_owned(), password: "x".to_owned() };

    assert_eq!(
        submit_login(&client, &credentials).await.unwrap_err(),
        "Network error. Please check your connection and try again."
    );
}
