//! Non-interactive `list` subcommand: runs the same browse query as the list
//! screens and prints the result as a table or a JSON array.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::core::item::{CategoryFilter, Item, ItemStatus, ItemType};
use crate::core::query;
use crate::core::store::ItemProvider;

/// Filters for one `list` invocation.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub status: Option<ItemStatus>,
}

pub fn list_items(store: &dyn ItemProvider, kind: ItemType, filter: &ListQuery) -> Vec<Item> {
    let items = query::items_by_type(store, kind);
    query::browse(&items, &filter.search, &filter.category, filter.status)
}

/// Fixed-width table with a header row; "No items" when empty.
pub fn format_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items\n".to_string();
    }

    let headers = ["ID", "TITLE", "CATEGORY", "LOCATION", "DATE", "STATUS"];
    let rows: Vec<[String; 6]> = items
        .iter()
        .map(|item| {
            [
                item.id.clone(),
                item.title.clone(),
                item.category.to_string(),
                item.location.clone(),
                item.date.to_string(),
                item.status.label().to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if i < last {
            out.push_str(&" ".repeat(width - cell.width() + 2));
        }
    }
    out.push('\n');
}

/// Writes the listing for `kind` to `out`.
pub fn write_listing(
    out: &mut impl Write,
    store: &dyn ItemProvider,
    kind: ItemType,
    filter: &ListQuery,
    json: bool,
) -> io::Result<()> {
    let items = list_items(store, kind, filter);
    log::info!("Listing {} {:?} items", items.len(), kind);
    if json {
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)
    } else {
        out.write_all(format_table(&items).as_bytes())
    }
}
