//! # Application State
//!
//! Core business state for the lost & found app. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Box<dyn ItemProvider>  // lost + found listings
//! ├── nav: Navigator                // tabs / detail route
//! ├── lost: ListScreen              // search + filters, Lost tab
//! ├── found: ListScreen             // search + filters, Found tab
//! ├── form: PostForm                // Post tab fields
//! ├── notice: Option<Notice>        // modal message
//! ├── status_message: String        // status bar text
//! └── submit_delay: Duration        // pause before a post is acknowledged
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::form::PostForm;
use crate::core::item::{Item, ItemType};
use crate::core::navigation::{Navigator, Tab};
use crate::core::screen::{ListScreen, Notice};
use crate::core::store::ItemProvider;

pub struct App {
    pub store: Box<dyn ItemProvider>,
    pub nav: Navigator,
    pub lost: ListScreen,
    pub found: ListScreen,
    pub form: PostForm,
    pub notice: Option<Notice>,
    pub status_message: String,
    pub submit_delay: Duration,
}

impl App {
    pub fn new(store: Box<dyn ItemProvider>) -> Self {
        Self::from_config(store, &ResolvedConfig::default())
    }

    pub fn from_config(store: Box<dyn ItemProvider>, config: &ResolvedConfig) -> Self {
        Self {
            store,
            nav: Navigator::new(config.start_tab),
            lost: ListScreen::new(),
            found: ListScreen::new(),
            form: PostForm::new(),
            notice: None,
            status_message: String::from("Welcome to Campus Lost & Found!"),
            submit_delay: config.submit_delay,
        }
    }

    pub fn screen(&self, kind: ItemType) -> &ListScreen {
        match kind {
            ItemType::Lost => &self.lost,
            ItemType::Found => &self.found,
        }
    }

    pub fn screen_mut(&mut self, kind: ItemType) -> &mut ListScreen {
        match kind {
            ItemType::Lost => &mut self.lost,
            ItemType::Found => &mut self.found,
        }
    }

    /// Items shown on the `kind` list after its search and filters.
    pub fn visible_items(&self, kind: ItemType) -> Vec<Item> {
        let all = self.store.list_items(kind);
        self.screen(kind).visible(&all)
    }

    pub fn total_items(&self, kind: ItemType) -> usize {
        self.store.list_items(kind).len()
    }

    /// Listings across both collections.
    pub fn item_count(&self) -> usize {
        self.total_items(ItemType::Lost) + self.total_items(ItemType::Found)
    }

    /// The list shown by the current tab, if it is a list tab.
    pub fn active_list(&self) -> Option<ItemType> {
        match self.nav.active_tab() {
            Tab::Lost => Some(ItemType::Lost),
            Tab::Found => Some(ItemType::Found),
            Tab::Post | Tab::Info => None,
        }
    }
}
