use launchpad_types::{ItemKind, LaunchItem};

const STEAM_ICON: &str =
    "https://images.unsplash.com/photo-1640279993485-06461e3d5232?w=800&auto=format&fit=crop&q=60";
const EPIC_ICON: &str =
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&auto=format&fit=crop&q=60";
const GITHUB_ICON: &str =
    "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb?w=800&auto=format&fit=crop&q=60";

/// Built-in catalog used when nothing usable is persisted
#[must_use]
pub fn seed_items() -> Vec<LaunchItem> {
    vec![
        LaunchItem {
            id: "1".to_string(),
            name: "Steam".to_string(),
            kind: ItemKind::Game,
            url: Some("https://store.steampowered.com".to_string()),
            native_url: Some("steam://".to_string()),
            category: "games".to_string(),
            favorite: true,
            icon: Some(STEAM_ICON.to_string()),
            last_used_at: None,
        },
        LaunchItem {
            id: "2".to_string(),
            name: "Epic Games".to_string(),
            kind: ItemKind::Game,
            url: Some("https://store.epicgames.com".to_string()),
            native_url: Some("com.epicgames.launcher://".to_string()),
            category: "games".to_string(),
            favorite: false,
            icon: Some(EPIC_ICON.to_string()),
            last_used_at: None,
        },
        LaunchItem {
            id: "3".to_string(),
            name: "GitHub".to_string(),
            kind: ItemKind::Website,
            url: Some("https://github.com".to_string()),
            native_url: None,
            category: "websites".to_string(),
            favorite: true,
            icon: Some(GITHUB_ICON.to_string()),
            last_used_at: None,
        },
    ]
}
