//! Core library for the Launchpad catalog launcher.
//!
//! The catalog lives in a [`CatalogStore`], which persists every mutation
//! through a [`Persistence`] adapter over a [`KeyValueStore`]. Views are
//! derived with [`view::project`] and items are started with a [`Launcher`].

pub mod config;
pub mod launch;
pub mod storage;
pub mod view;

mod catalog;
mod error;
mod seed;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogEvent, CatalogStore};
pub use error::{Error, Result};
pub use launch::{LaunchTarget, Launcher, Opener, SystemOpener};
pub use seed::seed_items;
pub use storage::{FileStore, KeyValueStore, MemoryStore, Persistence};
pub use view::View;

pub use launchpad_types::*;
