//! Test fixtures and helpers

use crate::launch::Opener;
use crate::storage::{FileStore, MemoryStore, Persistence};
use crate::CatalogStore;
use chrono::{DateTime, TimeZone, Utc};
use launchpad_types::{ItemKind, LaunchItem};
use std::cell::RefCell;
use std::io;
use std::path::Path;

/// Create a website item with the given id and name
pub fn make_website(id: &str, name: &str) -> LaunchItem {
    LaunchItem {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Website,
        url: Some(format!("https://{id}.test")),
        native_url: None,
        category: "websites".to_string(),
        favorite: false,
        icon: None,
        last_used_at: None,
    }
}

/// Create a game item with a native URI
pub fn make_game(id: &str, name: &str, native_url: &str) -> LaunchItem {
    LaunchItem {
        id: id.to_string(),
        name: name.to_string(),
        kind: ItemKind::Game,
        url: Some(format!("https://{id}.test")),
        native_url: Some(native_url.to_string()),
        category: "games".to_string(),
        favorite: false,
        icon: None,
        last_used_at: None,
    }
}

/// A fixed point in time, `minutes` after 2024-01-01 00:00 UTC
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minutes)
}

/// Store over memory holding exactly `items`
pub fn memory_catalog(items: Vec<LaunchItem>) -> CatalogStore<MemoryStore> {
    CatalogStore::with_items(Persistence::new(MemoryStore::new()), items)
}

/// Open a store the way the application does at startup
pub fn open_file_catalog(dir: &Path) -> CatalogStore<FileStore> {
    CatalogStore::open(Persistence::new(FileStore::new(dir)))
}

/// Opener that remembers what it was asked to open
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<(String, String)> {
        self.opened.borrow().clone()
    }

    fn record(&self, how: &str, uri: &str) -> io::Result<()> {
        self.opened
            .borrow_mut()
            .push((how.to_string(), uri.to_string()));
        if self.fail {
            Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
        } else {
            Ok(())
        }
    }
}

impl Opener for RecordingOpener {
    fn open_native(&self, uri: &str) -> io::Result<()> {
        self.record("native", uri)
    }

    fn open_web(&self, url: &str) -> io::Result<()> {
        self.record("web", url)
    }
}
