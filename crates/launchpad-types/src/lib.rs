//! Shared types for the Launchpad catalog launcher.
//!
//! This crate provides the data model used by launchpad-core and the CLI:
//! catalog entries, the drafts and patches that create and edit them, view
//! categories and the color theme. Catalog entries serialize to the persisted
//! record layout (`type`, `appUrl`, `lastUsed`, ...).

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Deserialize an optional string where an empty (or blank) string means absent
fn deserialize_empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(non_blank(opt))
}

/// Deserialize a launch timestamp that may be an RFC 3339 string, epoch millis,
/// null, or garbage. Anything unreadable is treated as "never launched".
fn deserialize_lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Errors produced when a draft or patch would leave an item unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Item needs a web URL or a native app URL")]
    NotLaunchable,
}

/// Errors from parsing user-supplied identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown item kind: {0} (expected 'game' or 'website')")]
    UnknownKind(String),

    #[error("Unknown theme: {0} (expected 'dark' or 'light')")]
    UnknownTheme(String),
}

/// What sort of thing a catalog entry launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Game,
    Website,
}

impl ItemKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Game => "game",
            ItemKind::Website => "website",
        }
    }

    /// Category tag assigned when none is given explicitly
    #[must_use]
    pub fn default_category(self) -> &'static str {
        match self {
            ItemKind::Game => "games",
            ItemKind::Website => "websites",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "game" => Ok(ItemKind::Game),
            "website" => Ok(ItemKind::Website),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// A catalog entry.
///
/// Field order and names follow the persisted record layout. Deserialization
/// is lenient: blank URLs and icons decode as absent, a missing `favorite` is
/// `false`, and a missing `category` is derived from the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchItem {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Web address; the fallback for games without a native URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Platform URI scheme (e.g. `steam://`), only used for games
    #[serde(rename = "appUrl", skip_serializing_if = "Option::is_none")]
    pub native_url: Option<String>,

    pub category: String,

    pub favorite: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(rename = "lastUsed")]
    pub last_used_at: Option<DateTime<Utc>>,
}

impl<'de> Deserialize<'de> for LaunchItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LaunchItemRaw {
            id: String,
            name: String,
            #[serde(rename = "type")]
            kind: ItemKind,
            #[serde(default, deserialize_with = "deserialize_empty_as_none")]
            url: Option<String>,
            #[serde(default, deserialize_with = "deserialize_empty_as_none")]
            app_url: Option<String>,
            #[serde(default, deserialize_with = "deserialize_empty_as_none")]
            category: Option<String>,
            #[serde(default)]
            favorite: bool,
            #[serde(default, deserialize_with = "deserialize_empty_as_none")]
            icon: Option<String>,
            #[serde(default, deserialize_with = "deserialize_lenient_timestamp")]
            last_used: Option<DateTime<Utc>>,
        }

        let raw = LaunchItemRaw::deserialize(deserializer)?;

        Ok(Self {
            category: raw
                .category
                .unwrap_or_else(|| raw.kind.default_category().to_string()),
            id: raw.id,
            name: raw.name,
            kind: raw.kind,
            url: raw.url,
            native_url: raw.app_url,
            favorite: raw.favorite,
            icon: raw.icon,
            last_used_at: raw.last_used,
        })
    }
}

impl LaunchItem {
    /// Icon reference, or `placeholder` when the item has none
    #[must_use]
    pub fn icon_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.icon.as_deref().unwrap_or(placeholder)
    }

    /// Whether the item can be launched by at least one means
    #[must_use]
    pub fn is_launchable(&self) -> bool {
        self.url.is_some() || (self.kind == ItemKind::Game && self.native_url.is_some())
    }
}

/// A new catalog entry before the store assigns its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ItemKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(
        default,
        rename = "appUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub native_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Explicit category; derived from `kind` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemDraft {
    #[must_use]
    pub fn website(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Website,
            url: Some(url.into()),
            native_url: None,
            icon: None,
            category: None,
        }
    }

    #[must_use]
    pub fn game(name: impl Into<String>, native_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Game,
            url: None,
            native_url: Some(native_url.into()),
            icon: None,
            category: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Reject drafts with a blank name or no way to launch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or [`ValidationError::NotLaunchable`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let has_url = self.url.as_deref().is_some_and(|u| !u.trim().is_empty());
        let has_native = self.kind == ItemKind::Game
            && self
                .native_url
                .as_deref()
                .is_some_and(|u| !u.trim().is_empty());

        if !has_url && !has_native {
            return Err(ValidationError::NotLaunchable);
        }
        Ok(())
    }

    /// Build a fresh catalog entry: not a favorite, never launched.
    /// Native URLs are dropped for websites.
    #[must_use]
    pub fn into_item(self, id: String) -> LaunchItem {
        let native_url = match self.kind {
            ItemKind::Game => non_blank(self.native_url),
            ItemKind::Website => None,
        };

        LaunchItem {
            id,
            name: self.name.trim().to_string(),
            kind: self.kind,
            url: non_blank(self.url),
            native_url,
            category: non_blank(self.category)
                .unwrap_or_else(|| self.kind.default_category().to_string()),
            favorite: false,
            icon: non_blank(self.icon),
            last_used_at: None,
        }
    }
}

/// Field-by-field edit of an existing entry.
///
/// `None` keeps the current value. For the optional fields, `Some(None)` (or
/// `Some(Some(""))`) clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub kind: Option<ItemKind>,
    pub url: Option<Option<String>>,
    pub native_url: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub category: Option<String>,
}

impl ItemPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn url(mut self, url: Option<String>) -> Self {
        self.url = Some(url);
        self
    }

    #[must_use]
    pub fn native_url(mut self, native_url: Option<String>) -> Self {
        self.native_url = Some(native_url);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Merge onto `item`. Identity, favorite flag and launch history are never touched.
    pub fn apply(&self, item: &mut LaunchItem) {
        let previous_kind = item.kind;

        if let Some(name) = &self.name
            && !name.trim().is_empty()
        {
            item.name = name.trim().to_string();
        }
        if let Some(kind) = self.kind {
            item.kind = kind;
        }
        if let Some(url) = &self.url {
            item.url = non_blank(url.clone());
        }
        if let Some(native_url) = &self.native_url {
            item.native_url = non_blank(native_url.clone());
        }
        if let Some(icon) = &self.icon {
            item.icon = non_blank(icon.clone());
        }

        match non_blank(self.category.clone()) {
            Some(category) => item.category = category,
            None => {
                // A derived category follows the kind; a custom one stays put
                if item.kind != previous_kind
                    && item.category == previous_kind.default_category()
                {
                    item.category = item.kind.default_category().to_string();
                }
            }
        }

        if item.kind == ItemKind::Website {
            item.native_url = None;
        }
    }

    /// Check that applying this patch to `item` leaves it nameable and launchable.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or [`ValidationError::NotLaunchable`].
    pub fn validate_against(&self, item: &LaunchItem) -> Result<(), ValidationError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ValidationError::EmptyName);
        }

        let mut preview = item.clone();
        self.apply(&mut preview);
        if preview.is_launchable() {
            Ok(())
        } else {
            Err(ValidationError::NotLaunchable)
        }
    }
}

/// A view filter. The built-in set is fixed; any other id is a user category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Games,
    Websites,
    Favorites,
    Recent,
    /// Switches the presentation into edit mode instead of filtering
    Manage,
    Custom(String),
}

impl Category {
    /// Built-in categories in display order
    #[must_use]
    pub fn builtin() -> [Category; 6] {
        [
            Category::All,
            Category::Games,
            Category::Websites,
            Category::Favorites,
            Category::Recent,
            Category::Manage,
        ]
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Category::All => "all",
            Category::Games => "games",
            Category::Websites => "websites",
            Category::Favorites => "favorites",
            Category::Recent => "recent",
            Category::Manage => "manage",
            Category::Custom(id) => id,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Category::All => "All Items",
            Category::Games => "Games",
            Category::Websites => "Websites",
            Category::Favorites => "Favorites",
            Category::Recent => "Recent",
            Category::Manage => "Manage",
            Category::Custom(id) => id,
        }
    }

    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

impl From<&str> for Category {
    fn from(id: &str) -> Self {
        match id {
            "all" => Category::All,
            "games" => Category::Games,
            "websites" => Category::Websites,
            "favorites" => Category::Favorites,
            "recent" => Category::Recent,
            "manage" => Category::Manage,
            other => Category::Custom(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(id: String) -> Self {
        Category::from(id.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(id) => id,
            builtin => builtin.id().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}
