//! # Query Layer
//!
//! Pure functions deriving a displayed subset of items. Nothing here mutates
//! the store; every function returns a fresh (possibly empty) `Vec`.
//!
//! ```text
//! items_by_type ─► search_items ─► filter_by_category ─► filter_by_status
//!                  (query text)    (chip selection)      (optional)
//! ```

use crate::core::item::{CategoryFilter, Item, ItemStatus, ItemType};
use crate::core::store::ItemProvider;

/// The backing collection for one kind.
pub fn items_by_type(provider: &dyn ItemProvider, kind: ItemType) -> Vec<Item> {
    provider.list_items(kind)
}

/// Looks an item up across lost then found.
pub fn item_by_id(provider: &dyn ItemProvider, id: &str) -> Option<Item> {
    provider.find_item(id)
}

/// Case-insensitive substring match over title, description and location.
///
/// Every string contains the empty string, so an empty query keeps everything.
pub fn search_items(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn filter_by_category(items: &[Item], category: &CategoryFilter) -> Vec<Item> {
    match category {
        CategoryFilter::All => items.to_vec(),
        CategoryFilter::Only(wanted) => items
            .iter()
            .filter(|item| item.category == *wanted)
            .cloned()
            .collect(),
    }
}

pub fn filter_by_status(items: &[Item], status: ItemStatus) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.status == status)
        .cloned()
        .collect()
}

/// The list-screen filter chain: search, then category, then status (if any).
pub fn browse(
    items: &[Item],
    query: &str,
    category: &CategoryFilter,
    status: Option<ItemStatus>,
) -> Vec<Item> {
    let searched = search_items(items, query);
    let categorized = filter_by_category(&searched, category);
    match status {
        Some(status) => filter_by_status(&categorized, status),
        None => categorized,
    }
}
