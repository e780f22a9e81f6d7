use super::*;
use medicare_api::SessionStore;
use medicare_api::session::{ACCESS_TOKEN_KEY, USER_KEY};

fn storage_in(dir: &tempfile::TempDir) -> FileStorage {
    FileStorage::new(dir.path().join("session.json"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    assert!(!SessionStore::new(&storage).is_authenticated());
}

#[test]
fn values_survive_a_new_handle() {
    let dir = tempfile::tempdir().unwrap();
    storage_in(&dir).set(ACCESS_TOKEN_KEY, "tok").unwrap();

    assert_eq!(storage_in(&dir).get(ACCESS_TOKEN_KEY).as_deref(), Some("tok"));
}

#[test]
fn set_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("nested/deeper/session.json"));

    storage.set(USER_KEY, "{}").unwrap();

    assert!(storage.path().exists());
}

#[test]
fn removing_last_key_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    storage.set(USER_KEY, "{}").unwrap();

    storage.remove(ACCESS_TOKEN_KEY);
    assert!(storage.path().exists());
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));

    storage.remove(USER_KEY);
    assert!(!storage.path().exists());
}

#[test]
fn malformed_file_reads_as_empty_and_is_replaced_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    std::fs::write(storage.path(), "not json").unwrap();

    assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok"));
}

#[test]
fn unwritable_path_reports_write_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where a directory is expected.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let storage = FileStorage::new(blocker.join("session.json"));

    let err = storage.set(ACCESS_TOKEN_KEY, "tok").unwrap_err();

    assert!(matches!(err, StorageError::Write { ref key, .. } if key == ACCESS_TOKEN_KEY));
}
