//! Plain-text rendering of projected views

use chrono::{DateTime, Utc};
use launchpad_core::{Category, LaunchItem};
use std::fmt::Write;

/// Relative "last used" label
pub fn format_last_used(last_used: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(at) = last_used else {
        return "never".to_string();
    };

    let elapsed = now.signed_duration_since(at);
    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 30 {
        format!("{}d ago", elapsed.num_days())
    } else {
        at.format("%Y-%m-%d").to_string()
    }
}

/// One line per item: favorite marker, name, kind, category, last use, id
pub fn render_grid(items: &[&LaunchItem], now: DateTime<Utc>) -> String {
    if items.is_empty() {
        return "No items\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        let marker = if item.favorite { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<24} {:<8} {:<12} {:<10} {}",
            item.name,
            item.kind,
            item.category,
            format_last_used(item.last_used_at, now),
            item.id
        );
    }
    out
}

/// Editable listing with every field shown
pub fn render_manage(items: &[&LaunchItem], placeholder_icon: &str) -> String {
    if items.is_empty() {
        return "No items\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{} [{}]", item.name, item.id);
        let _ = writeln!(out, "    type:     {}", item.kind);
        let _ = writeln!(out, "    category: {}", item.category);
        let _ = writeln!(out, "    url:      {}", item.url.as_deref().unwrap_or("-"));
        if let Some(native_url) = &item.native_url {
            let _ = writeln!(out, "    app url:  {native_url}");
        }
        let _ = writeln!(out, "    icon:     {}", item.icon_or(placeholder_icon));
        let _ = writeln!(out, "    favorite: {}", if item.favorite { "yes" } else { "no" });
    }
    out
}

/// Sidebar-style category listing with counts; `selected` is marked
pub fn render_categories(counts: &[(Category, usize)], selected: &Category) -> String {
    let mut out = String::new();
    for (category, count) in counts {
        let marker = if category == selected { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<12} {:<12} {count}",
            category.id(),
            category.label()
        );
    }
    let marker = if *selected == Category::Manage { '>' } else { ' ' };
    let _ = writeln!(
        out,
        "{marker} {:<12} {}",
        Category::Manage.id(),
        Category::Manage.label()
    );
    out
}
