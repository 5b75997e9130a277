//! Handing catalog items to the host's URL handling.
//!
//! Games with a native URI go to the scheme handler; everything else opens
//! its web URL in the browser. The host owns the outcome: there is no success
//! signal, so every attempt counts as dispatched and is recorded.

use crate::catalog::CatalogStore;
use crate::storage::KeyValueStore;
use launchpad_types::{ItemKind, LaunchItem};
use std::io;
use tracing::{debug, info, warn};

/// Where a launch is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// Platform URI scheme, e.g. `steam://`
    Native(String),
    /// Web address opened in a new browser context
    Web(String),
}

impl LaunchTarget {
    /// Native URI for games that have one, else the web URL
    pub fn for_item(item: &LaunchItem) -> Option<Self> {
        if item.kind == ItemKind::Game
            && let Some(uri) = &item.native_url
        {
            return Some(LaunchTarget::Native(uri.clone()));
        }
        item.url.clone().map(LaunchTarget::Web)
    }

    pub fn uri(&self) -> &str {
        match self {
            LaunchTarget::Native(uri) | LaunchTarget::Web(uri) => uri,
        }
    }
}

/// Something that can hand a URI to the host platform
pub trait Opener {
    /// # Errors
    ///
    /// Returns an error if no handler could be spawned.
    fn open_native(&self, uri: &str) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if no browser could be spawned.
    fn open_web(&self, url: &str) -> io::Result<()>;
}

/// Opens URIs through the desktop's default handlers
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open web URLs with `browser` instead of the default handler
    #[must_use]
    pub fn with_browser(mut self, browser: Option<String>) -> Self {
        self.browser = browser;
        self
    }
}

impl Opener for SystemOpener {
    fn open_native(&self, uri: &str) -> io::Result<()> {
        open::that_detached(uri)
    }

    fn open_web(&self, url: &str) -> io::Result<()> {
        match &self.browser {
            Some(browser) => open::with_detached(url, browser.clone()),
            None => open::that_detached(url),
        }
    }
}

pub struct Launcher<O> {
    opener: O,
}

impl<O: Opener> Launcher<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Dispatch the item with `id` and record the launch.
    ///
    /// Returns the target that was dispatched, or `None` when the id is
    /// unknown or the item has nothing to open (nothing is recorded then).
    pub fn launch<S: KeyValueStore>(
        &self,
        store: &mut CatalogStore<S>,
        id: &str,
    ) -> Option<LaunchTarget> {
        let Some(item) = store.get(id) else {
            debug!("Ignoring launch for unknown item {id}");
            return None;
        };

        let Some(target) = LaunchTarget::for_item(item) else {
            warn!("Item {} ({id}) has no URL to launch", item.name);
            return None;
        };

        info!("Launching {} via {}", item.name, target.uri());
        let result = match &target {
            LaunchTarget::Native(uri) => self.opener.open_native(uri),
            LaunchTarget::Web(url) => self.opener.open_web(url),
        };
        if let Err(e) = result {
            warn!("Failed to hand {} to the platform: {e}", target.uri());
        }

        store.record_launch(id);
        Some(target)
    }
}
