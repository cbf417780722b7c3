//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use crate::core::contact::{ContactError, ContactLauncher};
use crate::core::form::PostForm;
use crate::core::item::{Category, ItemType};
use crate::core::state::App;
use crate::core::store::MemoryStore;

/// A launcher that records URIs instead of opening them.
#[derive(Default)]
pub struct RecordingLauncher {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl ContactLauncher for RecordingLauncher {
    fn open(&self, uri: &str) -> Result<(), ContactError> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(uri.to_string());
        }
        if self.fail {
            Err(ContactError::Exited(Some(1)))
        } else {
            Ok(())
        }
    }
}

/// Creates a test App over the seeded in-memory store.
pub fn test_app() -> App {
    App::new(Box::new(MemoryStore::seeded()))
}

/// A form that passes every validation rule.
pub fn valid_form() -> PostForm {
    PostForm {
        item_type: Some(ItemType::Lost),
        title: "Green Umbrella".to_string(),
        description: "Folding umbrella with a wooden handle.".to_string(),
        category: Some(Category::Accessories),
        location: "Engineering Hall - Lobby".to_string(),
        contact_name: "Sam Park".to_string(),
        contact_email: "sam.p@university.edu".to_string(),
        contact_phone: "+1-555-0300".to_string(),
        ..Default::default()
    }
}
