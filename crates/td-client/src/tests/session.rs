use crate::Session;

use td_core::User;
use tempfile::TempDir;

fn session() -> Session {
    Session::new(User::from_username("alice"), "token-123")
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    session().save(&path).unwrap();
    let loaded = Session::load(&path).unwrap().unwrap();

    assert_eq!(loaded.user.id, "alice");
    assert_eq!(loaded.access_token, "token-123");
}

#[test]
fn test_load_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    assert!(Session::load(&path).unwrap().is_none());
}

#[test]
fn test_corrupted_file_is_treated_as_logged_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(Session::load(&path).unwrap().is_none());
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");

    session().save(&path).unwrap();
    assert!(Session::load(&path).unwrap().is_some());
}

#[test]
fn test_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    session().save(&path).unwrap();
    Session::clear(&path).unwrap();
    assert!(!path.exists());

    // Clearing an absent session is fine.
    Session::clear(&path).unwrap();
}
