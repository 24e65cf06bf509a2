//! Persistence through the file-backed preference store.

use std::fs;

use farm_i18n::{FileStore, Language, PreferenceStore, Resolver};

#[test]
fn choice_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut resolver = Resolver::with_store(FileStore::new(&path));
    assert_eq!(resolver.language(), Language::En);
    resolver.set_language(Language::Hi);
    drop(resolver);

    let restarted = Resolver::with_store(FileStore::new(&path));
    assert_eq!(restarted.language(), Language::Hi);
}

#[test]
fn file_holds_plain_code_under_language_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut resolver = Resolver::with_store(FileStore::new(&path));
    resolver.set_language(Language::Ta);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "language": "ta" }));
}

#[test]
fn corrupt_file_starts_at_default_and_is_repaired_on_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{ not json").unwrap();

    let mut resolver = Resolver::with_store(FileStore::new(&path));
    assert_eq!(resolver.language(), Language::En);

    resolver.set_language(Language::Bn);
    let store = FileStore::new(&path);
    assert_eq!(store.load("language").unwrap().as_deref(), Some("bn"));
}

#[test]
fn stale_code_on_disk_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"language": "pa"}"#).unwrap();

    let resolver = Resolver::with_store(FileStore::new(&path));
    assert_eq!(resolver.language(), Language::En);
}

#[test]
fn unwritable_location_does_not_block_switching() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let mut resolver = Resolver::with_store(FileStore::new(blocker.join("prefs.json")));
    assert!(resolver.set_language(Language::Mr).is_changed());
    assert_eq!(resolver.language(), Language::Mr);
}
