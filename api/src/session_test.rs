use super::*;
use crate::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn user() -> UserProfile {
    serde_json::from_value(serde_json::json!({ "id": 1, "name": "X" })).unwrap()
}

fn session() -> Session {
    Session {
        access_token: "a".to_owned(),
        refresh_token: "b".to_owned(),
        user: user(),
    }
}

/// Storage that accepts `limit` writes and then refuses.
struct FlakyStorage {
    inner: MemoryStorage,
    remaining: std::cell::Cell<usize>,
}

impl SessionStorage for FlakyStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.remaining.get() == 0 {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.remaining.set(self.remaining.get() - 1);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn is_authenticated_requires_token_and_user() {
    for (token, user) in [(false, false), (true, false), (false, true), (true, true)] {
        let storage = MemoryStorage::new();
        if token {
            storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
        }
        if user {
            storage.set(USER_KEY, r#"{"id":1}"#).unwrap();
        }
        let store = SessionStore::new(&storage);
        assert_eq!(store.is_authenticated(), token && user, "token={token} user={user}");
    }
}

#[test]
fn is_authenticated_does_not_require_refresh_token() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    storage.set(USER_KEY, r#"{"id":1}"#).unwrap();
    assert!(SessionStore::new(&storage).is_authenticated());
}

#[test]
fn is_authenticated_treats_empty_values_as_absent() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "").unwrap();
    storage.set(USER_KEY, r#"{"id":1}"#).unwrap();
    assert!(!SessionStore::new(&storage).is_authenticated());
}

// =============================================================
// current_user
// =============================================================

#[test]
fn current_user_parses_stored_record() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, r#"{"id":1,"name":"X"}"#).unwrap();
    assert_eq!(SessionStore::new(&storage).current_user(), Some(user()));
}

#[test]
fn current_user_none_for_malformed_records() {
    for raw in ["{", "not json", "null", "[]", "42", r#"{"name":"no id"}"#, r#"{"id":"one"}"#] {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, raw).unwrap();
        assert_eq!(SessionStore::new(&storage).current_user(), None, "raw={raw}");
    }
}

#[test]
fn current_user_none_when_absent() {
    let storage = MemoryStorage::new();
    assert_eq!(SessionStore::new(&storage).current_user(), None);
}

// =============================================================
// save / load / clear
// =============================================================

#[test]
fn save_writes_exactly_three_keys() {
    let storage = MemoryStorage::new();
    SessionStore::new(&storage).save(&session()).unwrap();

    let entries = storage.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries.get(ACCESS_TOKEN_KEY).map(String::as_str), Some("a"));
    assert_eq!(entries.get(REFRESH_TOKEN_KEY).map(String::as_str), Some("b"));
    let stored_user: serde_json::Value = serde_json::from_str(&entries[USER_KEY]).unwrap();
    assert_eq!(stored_user, serde_json::json!({ "id": 1, "name": "X" }));
}

#[test]
fn load_returns_saved_session() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session()).unwrap();
    assert_eq!(store.load(), Some(session()));
}

#[test]
fn load_none_when_any_part_missing() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session()).unwrap();
    storage.remove(REFRESH_TOKEN_KEY);
    assert_eq!(store.load(), None);
}

#[test]
fn clear_removes_every_session_key_and_nothing_else() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark").unwrap();
    let store = SessionStore::new(&storage);
    store.save(&session()).unwrap();

    store.clear();

    assert!(!store.is_authenticated());
    assert_eq!(storage.entries().len(), 1);
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn failed_save_rolls_back_partial_writes() {
    let storage = FlakyStorage { inner: MemoryStorage::new(), remaining: std::cell::Cell::new(2) };
    let store = SessionStore::new(&storage);

    let err = store.save(&session()).unwrap_err();

    assert!(matches!(err, StorageError::Write { ref key, .. } if key == USER_KEY));
    assert!(storage.inner.is_empty());
}

#[test]
fn failed_save_restores_previous_session() {
    let storage = FlakyStorage { inner: MemoryStorage::new(), remaining: std::cell::Cell::new(usize::MAX) };
    let store = SessionStore::new(&storage);
    store.save(&session()).unwrap();
    storage.remaining.set(1);

    let replacement = Session { access_token: "a2".to_owned(), refresh_token: "b2".to_owned(), user: user() };
    let err = store.save(&replacement).unwrap_err();

    assert!(matches!(err, StorageError::Write { ref key, .. } if key == REFRESH_TOKEN_KEY));
    assert_eq!(store.load(), Some(session()));
}

#[test]
fn save_tokens_keeps_refresh_token_when_not_rotated() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session()).unwrap();

    store
        .save_tokens(&TokenRefresh { access_token: "a2".to_owned(), refresh_token: None })
        .unwrap();

    assert_eq!(store.access_token().as_deref(), Some("a2"));
    assert_eq!(store.refresh_token().as_deref(), Some("b"));
    assert_eq!(store.current_user(), Some(user()));
}
