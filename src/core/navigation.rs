//! # Navigation Graph
//!
//! Two levels: a root switch between the tabbed main area and a full-screen
//! item detail. The detail route owns a copy of the item it shows, so it never
//! goes back to the store.
//!
//! ```text
//! Tabs(Lost) ─┐                        ┌─ back() ─► Tabs(return_to)
//! Tabs(Found) ┼─ open_detail(item) ─► Detail { item, return_to }
//! Tabs(Post)  │
//! Tabs(Info) ─┘
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Lost,
    Found,
    Post,
    Info,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Lost, Tab::Found, Tab::Post, Tab::Info];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Lost => "Lost Items",
            Tab::Found => "Found Items",
            Tab::Post => "Post Item",
            Tab::Info => "Info",
        }
    }

    /// Zero-based position in the tab bar.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Tabs(Tab),
    Detail { item: Item, return_to: Tab },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    route: Route,
}

impl Navigator {
    pub fn new(start: Tab) -> Self {
        Self {
            route: Route::Tabs(start),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The tab that is showing, or that the detail view will return to.
    pub fn active_tab(&self) -> Tab {
        match &self.route {
            Route::Tabs(tab) => *tab,
            Route::Detail { return_to, .. } => *return_to,
        }
    }

    pub fn detail_item(&self) -> Option<&Item> {
        match &self.route {
            Route::Detail { item, .. } => Some(item),
            Route::Tabs(_) => None,
        }
    }

    /// Switches tabs. Ignored while the detail view is open.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match self.route {
            Route::Tabs(ref mut current) => {
                *current = tab;
                true
            }
            Route::Detail { .. } => false,
        }
    }

    /// Pushes the detail route, taking the item by value.
    pub fn open_detail(&mut self, item: Item) {
        let return_to = self.active_tab();
        self.route = Route::Detail { item, return_to };
    }

    /// Returns from the detail route to the tab it was opened from.
    pub fn back(&mut self) -> bool {
        match self.route {
            Route::Detail { return_to, .. } => {
                self.route = Route::Tabs(return_to);
                true
            }
            Route::Tabs(_) => false,
        }
    }
}
