//! Filtered projections of the catalog.
//!
//! Everything here is a pure function of its inputs and borrows the catalog,
//! so a view can be recomputed on every render.

use launchpad_types::{Category, LaunchItem};

/// Items visible for `category` and `query`.
///
/// `favorites` keeps favorites, `recent` keeps launched items newest first,
/// `all` keeps everything, and any other id matches the item's category tag.
/// A non-empty query then keeps names containing it, ignoring case. `manage`
/// is the editable list and returns the whole catalog unsearched.
pub fn project<'a>(
    items: &'a [LaunchItem],
    category: &Category,
    query: &str,
) -> Vec<&'a LaunchItem> {
    let mut result: Vec<&LaunchItem> = match category {
        Category::Manage => return items.iter().collect(),
        Category::All => items.iter().collect(),
        Category::Favorites => items.iter().filter(|item| item.favorite).collect(),
        Category::Recent => {
            let mut launched: Vec<_> = items
                .iter()
                .filter(|item| item.last_used_at.is_some())
                .collect();
            // Stable, so equal timestamps keep catalog order
            launched.sort_by(|a, b| b.last_used_at.cmp(&a.last_used_at));
            launched
        }
        other => {
            let id = other.id();
            items.iter().filter(|item| item.category == id).collect()
        }
    };

    if !query.is_empty() {
        let needle = query.to_lowercase();
        result.retain(|item| item.name.to_lowercase().contains(&needle));
    }

    result
}

/// The current selection of the sidebar and search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub category: Category,
    pub query: String,
}

impl View {
    pub fn new(category: Category, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn project<'a>(&self, items: &'a [LaunchItem]) -> Vec<&'a LaunchItem> {
        project(items, &self.category, &self.query)
    }

    /// Whether the presentation should show the editable list
    pub fn is_manage(&self) -> bool {
        self.category == Category::Manage
    }
}

/// Item totals per category: the filtering built-ins first, then user
/// categories in order of first appearance. `manage` is not counted.
pub fn category_counts(items: &[LaunchItem]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Category::builtin()
        .into_iter()
        .filter(|category| *category != Category::Manage)
        .map(|category| {
            let count = project(items, &category, "").len();
            (category, count)
        })
        .collect();

    for item in items {
        let category = Category::from(item.category.as_str());
        if category.is_builtin() {
            continue;
        }
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category, 1)),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_items;

    #[test]
    fn test_manage_ignores_query() {
        let items = seed_items();
        assert_eq!(project(&items, &Category::Manage, "zzz").len(), 3);
    }

    #[test]
    fn test_view_is_manage() {
        assert!(View::new(Category::Manage, "").is_manage());
        assert!(!View::default().is_manage());
    }

    #[test]
    fn test_category_counts_for_seed() {
        let counts = category_counts(&seed_items());
        let lookup = |id: &str| {
            counts
                .iter()
                .find(|(c, _)| c.id() == id)
                .map(|(_, n)| *n)
        };

        assert_eq!(lookup("all"), Some(3));
        assert_eq!(lookup("games"), Some(2));
        assert_eq!(lookup("websites"), Some(1));
        assert_eq!(lookup("favorites"), Some(2));
        assert_eq!(lookup("recent"), Some(0));
        assert_eq!(lookup("manage"), None);
    }

    #[test]
    fn test_category_counts_include_custom_categories() {
        let mut items = seed_items();
        items[0].category = "retro".to_string();
        items[1].category = "retro".to_string();

        let counts = category_counts(&items);
        assert_eq!(
            counts.last(),
            Some(&(Category::Custom("retro".to_string()), 2))
        );
    }
}
