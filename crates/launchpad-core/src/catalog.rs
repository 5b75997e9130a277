//! The authoritative in-memory catalog.
//!
//! `CatalogStore` is the only mutator of the catalog. Every mutation is
//! followed by a save through the persistence adapter and a notification to
//! subscribers. A failed save never rolls the mutation back. Mutations that
//! target an unknown id do nothing and return `None`; the `try_*` variants
//! report the miss as [`Error::NotFound`].

use crate::storage::{KeyValueStore, Persistence};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use launchpad_types::{ItemDraft, ItemPatch, LaunchItem};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;
use uuid::Uuid;

/// Change notifications sent to subscribers after each mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    Added { id: String },
    Updated { id: String },
    Removed { id: String },
    FavoriteToggled { id: String, favorite: bool },
    Launched { id: String, at: DateTime<Utc> },
}

impl CatalogEvent {
    pub fn id(&self) -> &str {
        match self {
            CatalogEvent::Added { id }
            | CatalogEvent::Updated { id }
            | CatalogEvent::Removed { id }
            | CatalogEvent::FavoriteToggled { id, .. }
            | CatalogEvent::Launched { id, .. } => id,
        }
    }
}

pub struct CatalogStore<S> {
    items: Vec<LaunchItem>,
    persistence: Persistence<S>,
    subscribers: Vec<UnboundedSender<CatalogEvent>>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Open the catalog from persisted storage (or the seed list)
    pub fn open(persistence: Persistence<S>) -> Self {
        let items = persistence.load();
        Self::with_items(persistence, items)
    }

    /// Start from an explicit item list without reading storage
    pub fn with_items(persistence: Persistence<S>, items: Vec<LaunchItem>) -> Self {
        Self {
            items,
            persistence,
            subscribers: Vec::new(),
        }
    }

    pub fn items(&self) -> &[LaunchItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LaunchItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut Persistence<S> {
        &mut self.persistence
    }

    pub fn into_persistence(self) -> Persistence<S> {
        self.persistence
    }

    /// Receive a [`CatalogEvent`] for every mutation from now on.
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> UnboundedReceiver<CatalogEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Append a new item with a fresh id; not a favorite, never launched
    pub fn add(&mut self, draft: ItemDraft) -> &LaunchItem {
        let id = self.fresh_id();
        let item = draft.into_item(id.clone());
        debug!("Adding item {} ({})", item.name, id);
        self.items.push(item);
        self.commit(CatalogEvent::Added { id });

        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// [`add`](Self::add), rejecting drafts that could never be launched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidItem`] when the draft fails validation.
    pub fn try_add(&mut self, draft: ItemDraft) -> Result<&LaunchItem> {
        draft.validate()?;
        Ok(self.add(draft))
    }

    /// Merge `patch` onto the item with `id`
    pub fn update(&mut self, id: &str, patch: &ItemPatch) -> Option<&LaunchItem> {
        let Some(idx) = self.position(id) else {
            debug!("Ignoring update for unknown item {id}");
            return None;
        };

        patch.apply(&mut self.items[idx]);
        self.commit(CatalogEvent::Updated { id: id.to_string() });
        Some(&self.items[idx])
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no item has `id`.
    pub fn try_update(&mut self, id: &str, patch: &ItemPatch) -> Result<&LaunchItem> {
        self.update(id, patch)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Remove the item with `id`, returning it
    pub fn remove(&mut self, id: &str) -> Option<LaunchItem> {
        let Some(idx) = self.position(id) else {
            debug!("Ignoring remove for unknown item {id}");
            return None;
        };

        let removed = self.items.remove(idx);
        self.commit(CatalogEvent::Removed { id: id.to_string() });
        Some(removed)
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no item has `id`.
    pub fn try_remove(&mut self, id: &str) -> Result<LaunchItem> {
        self.remove(id).ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Option<&LaunchItem> {
        let Some(idx) = self.position(id) else {
            debug!("Ignoring favorite toggle for unknown item {id}");
            return None;
        };

        let item = &mut self.items[idx];
        item.favorite = !item.favorite;
        let favorite = item.favorite;
        self.commit(CatalogEvent::FavoriteToggled {
            id: id.to_string(),
            favorite,
        });
        Some(&self.items[idx])
    }

    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no item has `id`.
    pub fn try_toggle_favorite(&mut self, id: &str) -> Result<&LaunchItem> {
        self.toggle_favorite(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Stamp the item as launched now
    pub fn record_launch(&mut self, id: &str) -> Option<&LaunchItem> {
        self.record_launch_at(id, Utc::now())
    }

    pub fn record_launch_at(&mut self, id: &str, at: DateTime<Utc>) -> Option<&LaunchItem> {
        let Some(idx) = self.position(id) else {
            debug!("Ignoring launch record for unknown item {id}");
            return None;
        };

        self.items[idx].last_used_at = Some(at);
        self.commit(CatalogEvent::Launched {
            id: id.to_string(),
            at,
        });
        Some(&self.items[idx])
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Persist, then tell subscribers. Closed subscribers are dropped.
    fn commit(&mut self, event: CatalogEvent) {
        self.persistence.save(&self.items);
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
