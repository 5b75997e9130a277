//! Durable key-value storage and the catalog persistence adapter.
//!
//! The catalog is kept under a single key as a JSON array of records, and the
//! color theme under a second key. Reads never fail from the caller's point of
//! view: missing or corrupt data falls back to the seed list (or the default
//! theme). Writes that fail are logged and the in-memory state stays
//! authoritative.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::Result;
use crate::seed::seed_items;
use launchpad_types::{LaunchItem, Theme};
use tracing::{debug, error, warn};

/// Key holding the serialized catalog
pub const ITEMS_KEY: &str = "launcher_items";

/// Key holding the active color theme
pub const THEME_KEY: &str = "launcher_theme";

/// A local, synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value under `key`, `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads and writes the catalog and theme over a [`KeyValueStore`].
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Raw load: `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the value is not a valid catalog.
    pub fn try_load(&self) -> Result<Option<Vec<LaunchItem>>> {
        let Some(content) = self.store.get(ITEMS_KEY)? else {
            return Ok(None);
        };
        let items: Vec<LaunchItem> = serde_json::from_str(&content)?;
        Ok(Some(items))
    }

    /// Load the stored catalog, or the seed list when nothing usable is stored
    pub fn load(&self) -> Vec<LaunchItem> {
        match self.try_load() {
            Ok(Some(items)) => {
                debug!("Loaded {} catalog items", items.len());
                items
            }
            Ok(None) => {
                debug!("No stored catalog, using seed list");
                seed_items()
            }
            Err(crate::Error::Json(e)) => {
                warn!(
                    "Failed to parse stored catalog: {} (at line {}, column {}), using seed list",
                    e,
                    e.line(),
                    e.column()
                );
                seed_items()
            }
            Err(e) => {
                error!("Failed to read stored catalog: {e}, using seed list");
                seed_items()
            }
        }
    }

    /// Write the whole catalog. Failures are logged and swallowed; returns
    /// whether the write went through.
    pub fn save(&mut self, items: &[LaunchItem]) -> bool {
        let content = match serde_json::to_string(items) {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to serialize catalog: {e}");
                return false;
            }
        };

        match self.store.set(ITEMS_KEY, &content) {
            Ok(()) => {
                debug!("Saved {} catalog items", items.len());
                true
            }
            Err(e) => {
                error!("Failed to save catalog: {e}");
                false
            }
        }
    }

    /// Stored theme, dark when unset or unreadable
    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                error!("Failed to read theme: {e}");
                Theme::default()
            }
        }
    }

    /// Persist the theme; failures are logged and swallowed
    pub fn save_theme(&mut self, theme: Theme) -> bool {
        match self.store.set(THEME_KEY, theme.as_str()) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save theme: {e}");
                false
            }
        }
    }
}
