//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event ─► TuiEvent ─► dispatch() ─► Action ─► update() ─► Effect
//!                                   │                                  │
//!                          TuiState (selection,            execute_effect():
//!                           scroll) mutated here           timer / URI opener
//! ```
//!
//! Background work (the post acknowledgement timer, contact hand-off) sends
//! `Action`s back over an `mpsc` channel drained once per loop iteration.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms and only redraws after
//! input, a resize, or an action from a background task.

mod component;
mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::widgets::ListState;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::contact::{ContactKind, ContactLauncher, SystemLauncher};
use crate::core::form::{FormField, ItemDraft};
use crate::core::item::ItemType;
use crate::core::navigation::Tab;
use crate::core::screen::Edit;
use crate::core::state::App;
use crate::core::store::MemoryStore;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const PAGE: u16 = 10;

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub lost_list: ListState,
    pub found_list: ListState,
    pub detail_scroll: u16,
    pub form_scroll: u16,
    pub info_scroll: ScrollViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_mut(&mut self, kind: ItemType) -> &mut ListState {
        match kind {
            ItemType::Lost => &mut self.lost_list,
            ItemType::Found => &mut self.found_list,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(Box::new(MemoryStore::seeded()), &config);
    let mut tui = TuiState::new();
    let launcher: Arc<dyn ContactLauncher> = Arc::new(SystemLauncher::new(config.opener.clone()));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = dispatch(&app, &mut tui, &event) else {
                continue;
            };
            let effect = update(&mut app, action);
            if execute_effect(effect, &app, &launcher, &tx) {
                break 'main;
            }
        }

        // Handle background task actions (timer, contact failures)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            prepare_background_action(&mut tui, &action);
            let effect = update(&mut app, action);
            if execute_effect(effect, &app, &launcher, &tx) {
                break 'main;
            }
        }
    }

    info!("Shutting down with {} listings", app.item_count());
    ratatui::restore();
    Ok(())
}

/// Adjusts presentation state before a background action is applied.
fn prepare_background_action(tui: &mut TuiState, action: &Action) {
    if let Action::SubmissionAcknowledged(draft) = action {
        // New listings are inserted first, which shifts every row below
        reset_selection(tui.list_mut(draft.kind));
    }
}

/// Performs an `Effect`. Returns true when the app should exit.
fn execute_effect(
    effect: Effect,
    app: &App,
    launcher: &Arc<dyn ContactLauncher>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::ScheduleAcknowledgement(draft) => {
            spawn_acknowledgement(draft, app.submit_delay, tx.clone());
            false
        }
        Effect::OpenContact { kind, uri } => {
            spawn_contact(launcher.clone(), kind, uri, tx.clone());
            false
        }
    }
}

/// Translates a `TuiEvent` into an `Action` for the current screen.
///
/// Presentation-only input (list selection, scrolling) is applied to
/// `tui` directly and yields `None`.
pub fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Ctrl+C always quits, even over a notice
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // A notice captures input until dismissed
    if app.notice.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissNotice),
            _ => None,
        };
    }

    if app.nav.detail_item().is_some() {
        return dispatch_detail(tui, event);
    }

    match event {
        TuiEvent::JumpTab(index) => return Tab::from_index(*index).map(Action::SelectTab),
        TuiEvent::NextTab => return Some(Action::NextTab),
        TuiEvent::PrevTab => return Some(Action::PrevTab),
        _ => {}
    }

    match app.nav.active_tab() {
        Tab::Lost => dispatch_list(app, tui, ItemType::Lost, event),
        Tab::Found => dispatch_list(app, tui, ItemType::Found, event),
        Tab::Post => dispatch_form(app, event),
        Tab::Info => dispatch_info(tui, event),
    }
}

fn dispatch_detail(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft => Some(Action::Back),
        TuiEvent::InputChar('e') => Some(Action::Contact(ContactKind::Email)),
        TuiEvent::InputChar('p') => Some(Action::Contact(ContactKind::Phone)),
        TuiEvent::InputChar('r') => Some(Action::RespondToListing),
        TuiEvent::InputChar('s') => Some(Action::ShareItem),
        TuiEvent::CursorUp => {
            tui.detail_scroll = tui.detail_scroll.saturating_sub(1);
            None
        }
        TuiEvent::CursorDown => {
            tui.detail_scroll = tui.detail_scroll.saturating_add(1);
            None
        }
        TuiEvent::PageUp => {
            tui.detail_scroll = tui.detail_scroll.saturating_sub(PAGE);
            None
        }
        TuiEvent::PageDown => {
            tui.detail_scroll = tui.detail_scroll.saturating_add(PAGE);
            None
        }
        _ => None,
    }
}

fn dispatch_list(
    app: &App,
    tui: &mut TuiState,
    kind: ItemType,
    event: &TuiEvent,
) -> Option<Action> {
    let filter = match event {
        TuiEvent::InputChar(c) => Some(Action::EditSearch(kind, Edit::Insert(*c))),
        TuiEvent::Paste(text) => Some(Action::EditSearch(kind, Edit::Paste(text.clone()))),
        TuiEvent::Backspace => Some(Action::EditSearch(kind, Edit::Backspace)),
        TuiEvent::ClearInput | TuiEvent::Escape => Some(Action::EditSearch(kind, Edit::Clear)),
        TuiEvent::CursorLeft => Some(Action::CycleCategory {
            kind,
            forward: false,
        }),
        TuiEvent::CursorRight => Some(Action::CycleCategory {
            kind,
            forward: true,
        }),
        TuiEvent::CycleStatus => Some(Action::CycleStatus(kind)),
        _ => None,
    };
    if filter.is_some() {
        // The visible set is about to change; start again from the top
        reset_selection(tui.list_mut(kind));
        return filter;
    }

    match event {
        TuiEvent::NextFocus => Some(Action::NextTab),
        TuiEvent::PrevFocus => Some(Action::PrevTab),
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::PageUp | TuiEvent::PageDown => {
            let len = app.visible_items(kind).len();
            move_selection(tui.list_mut(kind), len, event);
            None
        }
        TuiEvent::Submit => {
            let items = app.visible_items(kind);
            let selected = tui
                .list_mut(kind)
                .selected()
                .unwrap_or(0)
                .min(items.len().saturating_sub(1));
            let item = items.get(selected)?.clone();
            tui.detail_scroll = 0;
            Some(Action::OpenItem(item))
        }
        _ => None,
    }
}

fn reset_selection(state: &mut ListState) {
    state.select(None);
    *state.offset_mut() = 0;
}

fn move_selection(state: &mut ListState, len: usize, event: &TuiEvent) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0).min(len - 1);
    let next = match event {
        TuiEvent::CursorUp => current.saturating_sub(1),
        TuiEvent::CursorDown => (current + 1).min(len - 1),
        TuiEvent::PageUp => current.saturating_sub(PAGE as usize),
        TuiEvent::PageDown => (current + PAGE as usize).min(len - 1),
        _ => current,
    };
    state.select(Some(next));
}

fn dispatch_form(app: &App, event: &TuiEvent) -> Option<Action> {
    let focus = app.form.focus;
    match event {
        TuiEvent::NextFocus | TuiEvent::CursorDown => Some(Action::FocusNext),
        TuiEvent::PrevFocus | TuiEvent::CursorUp => Some(Action::FocusPrev),
        TuiEvent::CursorLeft if !focus.is_text() => Some(Action::CycleChoice { forward: false }),
        TuiEvent::CursorRight if !focus.is_text() => Some(Action::CycleChoice { forward: true }),
        TuiEvent::Submit if focus == FormField::Submit => Some(Action::SubmitForm),
        TuiEvent::Submit => Some(Action::FocusNext),
        TuiEvent::InputChar(c) if focus.is_text() => Some(Action::EditField(Edit::Insert(*c))),
        TuiEvent::Paste(text) if focus.is_text() => {
            Some(Action::EditField(Edit::Paste(text.clone())))
        }
        TuiEvent::Backspace if focus.is_text() => Some(Action::EditField(Edit::Backspace)),
        TuiEvent::ClearInput if focus.is_text() => Some(Action::EditField(Edit::Clear)),
        _ => None,
    }
}

fn dispatch_info(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::CursorUp => tui.info_scroll.scroll_up(),
        TuiEvent::CursorDown => tui.info_scroll.scroll_down(),
        TuiEvent::PageUp => tui.info_scroll.scroll_page_up(),
        TuiEvent::PageDown => tui.info_scroll.scroll_page_down(),
        TuiEvent::NextFocus => return Some(Action::NextTab),
        TuiEvent::PrevFocus => return Some(Action::PrevTab),
        _ => {}
    }
    None
}

/// Sends `SubmissionAcknowledged(draft)` once `delay` has passed.
fn spawn_acknowledgement(
    draft: ItemDraft,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Scheduling acknowledgement for \"{}\" in {:?}", draft.title, delay);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Action::SubmissionAcknowledged(draft)).is_err() {
            warn!("Failed to send acknowledgement: receiver dropped");
        }
    })
}

/// Hands `uri` to the launcher off the UI thread; reports failure as an action.
fn spawn_contact(
    launcher: Arc<dyn ContactLauncher>,
    kind: ContactKind,
    uri: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = launcher.open(&uri) {
            warn!("Contact hand-off for {} failed: {}", uri, e);
            if tx.send(Action::ContactFailed(kind)).is_err() {
                warn!("Failed to send contact failure: receiver dropped");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::POSTED_MESSAGE;
    use crate::core::item::{Category, ItemStatus};
    use crate::core::navigation::Route;
    use crate::core::screen::NoticeKind;
    use crate::test_support::{RecordingLauncher, test_app, valid_form};

    /// Feeds events through dispatch + update, collecting non-trivial effects.
    fn feed(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            if let Some(action) = dispatch(app, tui, event) {
                let effect = update(app, action);
                if effect != Effect::None {
                    effects.push(effect);
                }
            }
        }
        effects
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_typing_on_list_edits_search() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        feed(&mut app, &mut tui, &typed("library"));
        assert_eq!(app.lost.query, "library");
        let visible = app.visible_items(ItemType::Lost);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");

        feed(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(app.lost.query.is_empty());
    }

    #[test]
    fn test_arrows_cycle_category_chips() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        feed(&mut app, &mut tui, &[TuiEvent::JumpTab(1), TuiEvent::CursorLeft]);
        assert_eq!(app.found.category.label(), "Other");
        feed(&mut app, &mut tui, &[TuiEvent::CursorRight, TuiEvent::CursorRight]);
        assert_eq!(app.found.category.label(), "Electronics");
    }

    #[test]
    fn test_enter_opens_selected_item_and_escape_returns() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.detail_scroll = 7;
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(app.nav.detail_item().map(|i| i.id.as_str()), Some("2"));
        assert_eq!(tui.detail_scroll, 0);

        // Tab keys do nothing on the detail screen
        feed(&mut app, &mut tui, &[TuiEvent::JumpTab(2)]);
        assert!(app.nav.detail_item().is_some());

        feed(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.nav.route(), &Route::Tabs(Tab::Lost));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        feed(&mut app, &mut tui, &typed("zzz"));
        feed(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(app.nav.detail_item().is_none());
    }

    #[test]
    fn test_enter_after_narrowing_search_opens_remaining_item() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorDown]);
        assert_eq!(tui.lost_list.selected(), Some(2));

        // Search edit and Enter arrive in one batch, before any redraw
        feed(
            &mut app,
            &mut tui,
            &[TuiEvent::Paste("airpods".to_string()), TuiEvent::Submit],
        );
        assert_eq!(app.nav.detail_item().map(|i| i.id.as_str()), Some("1"));
    }

    #[test]
    fn test_filter_change_resets_selection() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CursorDown]);
        feed(&mut app, &mut tui, &[TuiEvent::CursorRight]);
        assert_eq!(tui.lost_list.selected(), None);

        feed(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::CycleStatus]);
        assert_eq!(tui.lost_list.selected(), None);
    }

    #[test]
    fn test_stale_selection_is_clamped_on_enter() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.lost_list.select(Some(9));
        feed(&mut app, &mut tui, &[TuiEvent::Submit]);
        let last = app.visible_items(ItemType::Lost).last().map(|i| i.id.clone());
        assert_eq!(app.nav.detail_item().map(|i| i.id.clone()), last);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = ListState::default();
        move_selection(&mut state, 3, &TuiEvent::PageDown);
        assert_eq!(state.selected(), Some(2));
        move_selection(&mut state, 3, &TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(1));
        move_selection(&mut state, 0, &TuiEvent::CursorDown);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_detail_actions() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let item = app.store.find_item("4").unwrap();
        update(&mut app, Action::OpenItem(item));

        let effects = feed(&mut app, &mut tui, &[TuiEvent::InputChar('e')]);
        assert_eq!(
            effects,
            vec![Effect::OpenContact {
                kind: ContactKind::Email,
                uri: "mailto:morgan.b@university.edu".to_string(),
            }]
        );

        feed(&mut app, &mut tui, &[TuiEvent::InputChar('r')]);
        let notice = app.notice.clone().unwrap();
        assert_eq!(
            notice.message,
            "Your message has been sent to Morgan Brown. They will get back to you soon!"
        );

        // Notice swallows keys until dismissed
        feed(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(app.notice.is_none());
        assert!(app.nav.detail_item().is_some());
    }

    #[test]
    fn test_form_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        feed(&mut app, &mut tui, &[TuiEvent::JumpTab(2), TuiEvent::CursorRight]);
        assert_eq!(app.form.item_type, Some(ItemType::Lost));

        feed(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.form.focus, FormField::Title);
        feed(&mut app, &mut tui, &typed("Keys"));
        assert_eq!(app.form.title, "Keys");

        // Arrows don't cycle choices while a text field is focused
        feed(&mut app, &mut tui, &[TuiEvent::CursorLeft]);
        assert_eq!(app.form.item_type, Some(ItemType::Lost));

        feed(
            &mut app,
            &mut tui,
            &[TuiEvent::NextFocus, TuiEvent::NextFocus, TuiEvent::CursorRight],
        );
        assert_eq!(app.form.focus, FormField::Category);
        assert_eq!(app.form.category, Some(Category::Electronics));
    }

    #[test]
    fn test_invalid_submit_raises_error_notice() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.nav.select_tab(Tab::Post);
        app.form.focus = FormField::Submit;
        let effects = feed(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(effects.is_empty());
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Please select Lost or Found item");
    }

    #[tokio::test(start_paused = true)]
    async fn test_acknowledgement_waits_for_delay() {
        let (tx, rx) = mpsc::channel();
        let draft = valid_form().validate().unwrap();
        let delay = Duration::from_millis(1000);

        let handle = spawn_acknowledgement(draft.clone(), delay, tx);
        // Let the task start its sleep before moving the clock
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(999)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        handle.await.unwrap();
        assert_eq!(rx.try_recv(), Ok(Action::SubmissionAcknowledged(draft)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_flow_end_to_end() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();
        let launcher: Arc<dyn ContactLauncher> = Arc::new(RecordingLauncher::default());

        app.nav.select_tab(Tab::Post);
        app.form = valid_form();
        app.form.focus = FormField::Submit;

        let effects = feed(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Submit]);
        assert_eq!(effects.len(), 1, "second submit is ignored while posting");
        assert!(app.form.is_submitting);
        for effect in effects {
            assert!(!execute_effect(effect, &app, &launcher, &tx));
        }

        tui.lost_list.select(Some(2));
        tokio::time::sleep(app.submit_delay + Duration::from_millis(1)).await;
        let action = rx.try_recv().unwrap();
        prepare_background_action(&mut tui, &action);
        update(&mut app, action);
        assert_eq!(tui.lost_list.selected(), None, "highlight returns to the new listing");

        assert!(!app.form.is_submitting);
        assert_eq!(app.form.title, "");
        assert_eq!(app.notice.as_ref().map(|n| n.message.as_str()), Some(POSTED_MESSAGE));
        let lost = app.store.list_items(ItemType::Lost);
        assert_eq!(lost.len(), 4);
        assert_eq!(lost[0].title, "Green Umbrella");
        assert_eq!(lost[0].status, ItemStatus::Active);
    }

    #[tokio::test]
    async fn test_contact_failure_becomes_action() {
        let (tx, rx) = mpsc::channel();
        let launcher = Arc::new(RecordingLauncher::failing());
        spawn_contact(
            launcher.clone(),
            ContactKind::Phone,
            "tel:+1-555-0101".to_string(),
            tx,
        )
        .await
        .unwrap();
        assert_eq!(launcher.opened(), vec!["tel:+1-555-0101".to_string()]);
        assert_eq!(rx.try_recv(), Ok(Action::ContactFailed(ContactKind::Phone)));
    }

    #[tokio::test]
    async fn test_contact_success_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let launcher = Arc::new(RecordingLauncher::default());
        spawn_contact(launcher, ContactKind::Email, "mailto:a@b.edu".to_string(), tx)
            .await
            .unwrap();
        assert!(rx.try_recv().is_err());
    }
}
