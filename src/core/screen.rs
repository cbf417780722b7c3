//! # Screen State
//!
//! Per-screen state that outlives a single frame: search text and filter
//! chips on the list screens, plus the modal notice that stands in for a
//! platform alert. Presentation-only state (selection, scroll) stays in the
//! TUI adapter.

use crate::core::item::{CategoryFilter, Item, ItemStatus};
use crate::core::query;

/// A text edit applied at the end of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

impl Edit {
    /// Applies the edit. Single-line fields drop newlines from pasted text.
    pub fn apply(&self, target: &mut String, multiline: bool) -> bool {
        match self {
            Edit::Insert('\n') if !multiline => false,
            Edit::Insert(c) => {
                target.push(*c);
                true
            }
            Edit::Paste(text) => {
                if multiline {
                    target.push_str(text);
                } else {
                    target.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                }
                !text.is_empty()
            }
            Edit::Backspace => target.pop().is_some(),
            Edit::Clear => {
                let changed = !target.is_empty();
                target.clear();
                changed
            }
        }
    }
}

/// Search and filter selections of one list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListScreen {
    pub query: String,
    pub category: CategoryFilter,
    /// `None` shows every status.
    pub status: Option<ItemStatus>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The subset of `items` this screen displays.
    pub fn visible(&self, items: &[Item]) -> Vec<Item> {
        query::browse(items, &self.query, &self.category, self.status)
    }

    /// All → Active → Resolved → All.
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(ItemStatus::Active),
            Some(ItemStatus::Active) => Some(ItemStatus::Resolved),
            Some(ItemStatus::Resolved) => None,
        };
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map(|s| s.label()).unwrap_or("Any status")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A modal message, dismissed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}
