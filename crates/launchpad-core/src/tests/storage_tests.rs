//! Persistence adapter: seed fallback, corrupt data, legacy records, theme

use super::fixtures::*;
use crate::storage::{FileStore, ITEMS_KEY, KeyValueStore, MemoryStore, Persistence, THEME_KEY};
use crate::{Error, Result, Theme};

/// Store whose reads fail, as if the backing storage were unavailable
struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage("access denied".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("access denied".to_string()))
    }
}

fn names(items: &[crate::LaunchItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_empty_storage_loads_seed() {
    let persistence = Persistence::new(MemoryStore::new());
    let items = persistence.load();

    assert_eq!(items.len(), 3);
    assert_eq!(names(&items), ["Steam", "Epic Games", "GitHub"]);
}

#[test]
fn test_load_does_not_persist_seed() {
    let persistence = Persistence::new(MemoryStore::new());
    let _ = persistence.load();
    assert_eq!(persistence.store().raw(ITEMS_KEY), None);
}

#[test]
fn test_corrupt_storage_loads_seed() {
    let persistence = Persistence::new(MemoryStore::new().with_value(ITEMS_KEY, "{not json"));
    assert_eq!(names(&persistence.load()), ["Steam", "Epic Games", "GitHub"]);
    assert!(matches!(persistence.try_load(), Err(Error::Json(_))));
}

#[test]
fn test_wrong_shape_loads_seed() {
    let persistence =
        Persistence::new(MemoryStore::new().with_value(ITEMS_KEY, r#"{"items": []}"#));
    assert_eq!(persistence.load().len(), 3);
}

#[test]
fn test_unreadable_storage_loads_seed() {
    let persistence = Persistence::new(UnreadableStore);
    assert_eq!(persistence.load().len(), 3);
    assert_eq!(persistence.load_theme(), Theme::Dark);
}

#[test]
fn test_stored_empty_list_is_respected() {
    let persistence = Persistence::new(MemoryStore::new().with_value(ITEMS_KEY, "[]"));
    assert!(persistence.load().is_empty());
}

#[test]
fn test_loads_records_written_by_the_web_app() {
    let legacy = r#"[
        {"id":"1","name":"Steam","type":"game","url":"https://store.steampowered.com",
         "appUrl":"steam://","category":"games","favorite":true,"icon":"","lastUsed":null},
        {"id":"9f1c","name":"Docs","type":"website","url":"https://docs.rs","appUrl":"",
         "icon":"https://docs.rs/icon.png","category":"websites",
         "favorite":false,"lastUsed":"2024-05-02T09:15:00.000Z"}
    ]"#;
    let persistence = Persistence::new(MemoryStore::new().with_value(ITEMS_KEY, legacy));
    let items = persistence.load();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].icon, None);
    assert_eq!(items[0].native_url.as_deref(), Some("steam://"));
    assert_eq!(items[1].native_url, None);
    assert!(items[1].last_used_at.is_some());
}

#[test]
fn test_save_then_load() {
    let mut persistence = Persistence::new(MemoryStore::new());
    let items = vec![make_website("a", "Alpha"), make_game("g", "Quake", "quake://")];

    assert!(persistence.save(&items));
    assert_eq!(persistence.load(), items);
}

#[test]
fn test_saved_records_use_persisted_field_names() {
    let mut persistence = Persistence::new(MemoryStore::new());
    persistence.save(&[make_game("g", "Quake", "quake://")]);

    let raw: serde_json::Value =
        serde_json::from_str(persistence.store().raw(ITEMS_KEY).unwrap()).unwrap();
    let record = &raw[0];
    assert_eq!(record["type"], "game");
    assert_eq!(record["appUrl"], "quake://");
    assert!(record["lastUsed"].is_null());
    assert_eq!(record["favorite"], false);
}

#[test]
fn test_save_failure_is_swallowed() {
    let mut persistence = Persistence::new(MemoryStore::failing());
    assert!(!persistence.save(&[make_website("a", "Alpha")]));
    assert!(!persistence.save_theme(Theme::Light));
}

#[test]
fn test_theme_defaults_to_dark() {
    let persistence = Persistence::new(MemoryStore::new());
    assert_eq!(persistence.load_theme(), Theme::Dark);
}

#[test]
fn test_unknown_theme_defaults_to_dark() {
    let persistence = Persistence::new(MemoryStore::new().with_value(THEME_KEY, "sepia"));
    assert_eq!(persistence.load_theme(), Theme::Dark);
}

#[test]
fn test_theme_round_trip_on_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut persistence = Persistence::new(FileStore::new(temp_dir.path()));

    assert!(persistence.save_theme(Theme::Light));

    let reopened = Persistence::new(FileStore::new(temp_dir.path()));
    assert_eq!(reopened.load_theme(), Theme::Light);
}

#[test]
fn test_file_store_corrupt_file_loads_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join(ITEMS_KEY), "[{\"id\": 1").unwrap();

    let persistence = Persistence::new(FileStore::new(temp_dir.path()));
    assert_eq!(persistence.load().len(), 3);
}
