//! Pure sort/filter helpers over item lists.
//!
//! # Responsibility
//! - Provide the display-order and search behavior the UI recomputes per
//!   query; item order is never stored.
//!
//! # Invariants
//! - All sorts are stable and total.
//! - Absent optional fields compare as documented on [`ItemSort`]; filters
//!   treat them as the empty string.

use crate::model::item::Item;

/// Total orders available for item display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSort {
    /// Lexicographic by id. Ids are monotonically increasing timestamps,
    /// so this approximates insertion order.
    CreatedAt,
    /// Case-insensitive by title, ascending.
    Title,
    /// Case-insensitive by author, ascending; absent authors sort first.
    Author,
    /// By release year, ascending; absent years sort last.
    ReleaseYear,
}

/// Returns the items whose title, author, notes or decimal release year
/// contain `query` case-insensitively. A blank query matches everything.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect()
}

/// Returns the items in the order given by `sort`. Stable: equal items keep
/// their relative input order.
pub fn sort_items(items: &[Item], sort: ItemSort) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match sort {
        ItemSort::CreatedAt => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
        ItemSort::Title => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        ItemSort::Author => sorted.sort_by(|a, b| author_key(a).cmp(&author_key(b))),
        ItemSort::ReleaseYear => sorted.sort_by_key(year_key),
    }
    sorted
}

fn matches_query(item: &Item, needle: &str) -> bool {
    let year_text = item
        .release_year
        .map(|year| year.to_string())
        .unwrap_or_default();

    item.title.to_lowercase().contains(needle)
        || item.author.as_deref().unwrap_or("").to_lowercase().contains(needle)
        || item.notes.as_deref().unwrap_or("").to_lowercase().contains(needle)
        || year_text.contains(needle)
}

fn author_key(item: &Item) -> String {
    item.author.as_deref().unwrap_or("").to_lowercase()
}

// Absent years must land after every real year; real years are capped at
// four digits by the command boundary, so i64::MAX is a safe sentinel.
fn year_key(item: &Item) -> i64 {
    item.release_year.map_or(i64::MAX, i64::from)
}
