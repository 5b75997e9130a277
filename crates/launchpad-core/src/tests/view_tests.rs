//! View projection by category and search

use super::fixtures::*;
use crate::view::{View, project};
use crate::{Category, seed_items};

fn ids<'a>(items: &[&'a crate::LaunchItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_all_returns_catalog_in_order() {
    let items = seed_items();
    assert_eq!(ids(&project(&items, &Category::All, "")), ["1", "2", "3"]);
}

#[test]
fn test_favorites() {
    let items = seed_items();
    assert_eq!(ids(&project(&items, &Category::Favorites, "")), ["1", "3"]);
}

#[test]
fn test_category_filters_by_tag() {
    let items = seed_items();
    assert_eq!(ids(&project(&items, &Category::Games, "")), ["1", "2"]);
    assert_eq!(ids(&project(&items, &Category::Websites, "")), ["3"]);
}

#[test]
fn test_custom_category() {
    let mut items = seed_items();
    items[2].category = "dev".to_string();

    assert_eq!(ids(&project(&items, &Category::from("dev"), "")), ["3"]);
    assert!(project(&items, &Category::Websites, "").is_empty());
    assert!(project(&items, &Category::from("nothing"), "").is_empty());
}

#[test]
fn test_recent_orders_newest_first_and_skips_unlaunched() {
    let mut items = vec![
        make_website("t1", "One"),
        make_website("t3", "Three"),
        make_website("never", "Never"),
        make_website("t2", "Two"),
    ];
    items[0].last_used_at = Some(at_minute(1));
    items[1].last_used_at = Some(at_minute(3));
    items[3].last_used_at = Some(at_minute(2));

    assert_eq!(
        ids(&project(&items, &Category::Recent, "")),
        ["t3", "t2", "t1"]
    );
}

#[test]
fn test_recent_ties_keep_catalog_order() {
    let mut items = vec![make_website("a", "A"), make_website("b", "B")];
    items[0].last_used_at = Some(at_minute(7));
    items[1].last_used_at = Some(at_minute(7));

    assert_eq!(ids(&project(&items, &Category::Recent, "")), ["a", "b"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let items = seed_items();
    assert_eq!(ids(&project(&items, &Category::All, "git")), ["3"]);
    assert_eq!(ids(&project(&items, &Category::All, "GAMES")), ["2"]);
    assert_eq!(ids(&project(&items, &Category::All, "e")), ["1", "2"]);
}

#[test]
fn test_search_applies_after_category() {
    let items = seed_items();
    assert!(project(&items, &Category::Games, "git").is_empty());
    assert_eq!(ids(&project(&items, &Category::Favorites, "st")), ["1"]);
}

#[test]
fn test_search_with_no_match() {
    let items = seed_items();
    assert!(project(&items, &Category::All, "minecraft").is_empty());
}

#[test]
fn test_projection_is_idempotent() {
    let mut items = seed_items();
    items[1].last_used_at = Some(at_minute(4));
    items[0].last_used_at = Some(at_minute(9));
    let view = View::new(Category::Recent, "s");

    let first = view.project(&items);
    let second = view.project(&items);

    assert_eq!(first, second);
    assert_eq!(ids(&first), ["1", "2"]);
}

#[test]
fn test_projection_does_not_reorder_catalog() {
    let mut items = seed_items();
    items[2].last_used_at = Some(at_minute(9));
    items[0].last_used_at = Some(at_minute(1));
    let before = items.clone();

    let _ = project(&items, &Category::Recent, "");

    assert_eq!(items, before);
}
