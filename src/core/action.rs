//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter on a listing? That's `Action::OpenItem(item)`.
//! The post timer fires? That's `Action::SubmissionAcknowledged(draft)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! adapter must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::core::contact::ContactKind;
use crate::core::form::{FormError, FormField, ItemDraft};
use crate::core::item::{CategoryFilter, Item, ItemType};
use crate::core::navigation::Tab;
use crate::core::screen::{Edit, Notice};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // Navigation
    SelectTab(Tab),
    NextTab,
    PrevTab,
    /// Open the detail route carrying this item.
    OpenItem(Item),
    Back,

    // List screens
    EditSearch(ItemType, Edit),
    SetCategory(ItemType, CategoryFilter),
    CycleCategory { kind: ItemType, forward: bool },
    CycleStatus(ItemType),

    // Post form
    FocusField(FormField),
    FocusNext,
    FocusPrev,
    /// Edit the focused text field.
    EditField(Edit),
    /// Step the focused choice row (type or category).
    CycleChoice { forward: bool },
    SubmitForm,
    SubmissionAcknowledged(ItemDraft),

    // Detail screen
    Contact(ContactKind),
    ContactFailed(ContactKind),
    /// "I Found This!" on a lost item, "This Is Mine!" on a found one.
    RespondToListing,
    ShareItem,

    DismissNotice,
}

/// Side effects requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Wait the configured delay, then send `SubmissionAcknowledged(draft)`.
    ScheduleAcknowledgement(ItemDraft),
    /// Hand a `mailto:`/`tel:` URI to the OS.
    OpenContact { kind: ContactKind, uri: String },
}

pub const POSTED_MESSAGE: &str = "Your item has been posted! Thank you for helping the community.";
pub const SHARE_MESSAGE: &str = "Share this item with your friends and help spread the word!";

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,

        Action::SelectTab(tab) => {
            if app.nav.select_tab(tab) {
                info!("Switched to tab {:?}", tab);
            }
            Effect::None
        }
        Action::NextTab => {
            let tab = app.nav.active_tab().next();
            update(app, Action::SelectTab(tab))
        }
        Action::PrevTab => {
            let tab = app.nav.active_tab().prev();
            update(app, Action::SelectTab(tab))
        }
        Action::OpenItem(item) => {
            info!("Opening item {} ({})", item.id, item.title);
            app.nav.open_detail(item);
            Effect::None
        }
        Action::Back => {
            app.nav.back();
            Effect::None
        }

        Action::EditSearch(kind, edit) => {
            edit.apply(&mut app.screen_mut(kind).query, false);
            Effect::None
        }
        Action::SetCategory(kind, category) => {
            app.screen_mut(kind).category = category;
            Effect::None
        }
        Action::CycleCategory { kind, forward } => {
            let screen = app.screen_mut(kind);
            screen.category = screen.category.cycle(forward);
            Effect::None
        }
        Action::CycleStatus(kind) => {
            let screen = app.screen_mut(kind);
            screen.cycle_status();
            app.status_message = format!("Showing: {}", app.screen(kind).status_label());
            Effect::None
        }

        Action::FocusField(field) => {
            app.form.focus = field;
            Effect::None
        }
        Action::FocusNext => {
            app.form.focus = app.form.focus.next();
            Effect::None
        }
        Action::FocusPrev => {
            app.form.focus = app.form.focus.prev();
            Effect::None
        }
        Action::EditField(edit) => {
            // Fields are frozen until the pending post is acknowledged
            if app.form.is_submitting {
                return Effect::None;
            }
            let multiline = app.form.focus == FormField::Description;
            if let Some(text) = app.form.text_mut(app.form.focus) {
                edit.apply(text, multiline);
            }
            Effect::None
        }
        Action::CycleChoice { forward } => {
            if !app.form.is_submitting {
                app.form.cycle_choice(forward);
            }
            Effect::None
        }
        Action::SubmitForm => match app.form.begin_submit() {
            Ok(draft) => {
                info!("Submitting {:?} listing: {}", draft.kind, draft.title);
                app.status_message = "Posting...".to_string();
                Effect::ScheduleAcknowledgement(draft)
            }
            Err(FormError::Invalid(e)) => {
                debug!("Form rejected: {}", e);
                app.notice = Some(Notice::error(e.to_string()));
                Effect::None
            }
            Err(FormError::SubmissionInFlight) => {
                debug!("Ignoring submit while a post is in flight");
                Effect::None
            }
        },
        Action::SubmissionAcknowledged(draft) => {
            let kind = draft.kind;
            let id = uuid::Uuid::new_v4().to_string();
            let item = draft.into_item(id, Local::now().date_naive());
            let title = item.title.clone();
            match app.store.add_item(item) {
                Ok(()) => {
                    info!("Posted {:?} item: {}", kind, title);
                    app.status_message =
                        format!("Posted \"{}\" to {}", title, list_tab(kind).title());
                    app.notice = Some(Notice::success(POSTED_MESSAGE));
                }
                Err(e) => {
                    warn!("Failed to file posted item: {}", e);
                    app.notice = Some(Notice::error(e.to_string()));
                }
            }
            app.form.reset();
            Effect::None
        }

        Action::Contact(kind) => match app.nav.detail_item() {
            Some(item) => {
                let value = match kind {
                    ContactKind::Email => &item.contact_email,
                    ContactKind::Phone => &item.contact_phone,
                };
                Effect::OpenContact {
                    kind,
                    uri: kind.uri(value),
                }
            }
            None => Effect::None,
        },
        Action::ContactFailed(kind) => {
            app.notice = Some(Notice::error(kind.failure_message()));
            Effect::None
        }
        Action::RespondToListing => {
            if let Some(item) = app.nav.detail_item() {
                let message = format!(
                    "Your message has been sent to {}. They will get back to you soon!",
                    item.contact_name
                );
                app.notice = Some(Notice::success(message));
            }
            Effect::None
        }
        Action::ShareItem => {
            if app.nav.detail_item().is_some() {
                app.notice = Some(Notice::info("Share Item", SHARE_MESSAGE));
            }
            Effect::None
        }

        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
    }
}

fn list_tab(kind: ItemType) -> Tab {
    match kind {
        ItemType::Lost => Tab::Lost,
        ItemType::Found => Tab::Found,
    }
}

/// Label of the detail screen's respond button for an item.
pub fn respond_label(item: &Item) -> &'static str {
    match item.kind {
        ItemType::Lost => "I Found This!",
        ItemType::Found => "This Is Mine!",
    }
}
