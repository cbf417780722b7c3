use crate::core::item::ItemType;
use crate::core::navigation::Tab;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    InfoPage, ItemDetailPage, ItemListPage, NoticeDialog, PostFormPage, TabBar, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let mut title_bar = TitleBar::new(app.status_message.clone(), app.form.is_submitting);

    // The detail route covers the tab bar, like a pushed stack screen
    if let Some(item) = app.nav.detail_item() {
        let [title_area, main_area, hint_area] =
            Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
        title_bar.render(frame, title_area);
        ItemDetailPage::new(item, &mut tui.detail_scroll).render(frame, main_area);
        draw_hints(frame, hint_area, "↑↓ scroll · Esc back · Ctrl+C quit");
    } else {
        let [title_area, main_area, tab_area, hint_area] =
            Layout::vertical([Length(1), Min(0), Length(1), Length(1)]).areas(frame.area());
        title_bar.render(frame, title_area);
        draw_tab(frame, main_area, app, tui);
        TabBar::new(app.nav.active_tab()).render(frame, tab_area);
        draw_hints(frame, hint_area, key_hints(app.nav.active_tab()));
    }

    if let Some(notice) = &app.notice {
        NoticeDialog::new(notice).render(frame, frame.area());
    }
}

fn draw_tab(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    match app.nav.active_tab() {
        Tab::Lost => draw_list(frame, area, app, tui, ItemType::Lost),
        Tab::Found => draw_list(frame, area, app, tui, ItemType::Found),
        Tab::Post => PostFormPage::new(&app.form, &mut tui.form_scroll).render(frame, area),
        Tab::Info => InfoPage::new(app.item_count(), &mut tui.info_scroll).render(frame, area),
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, kind: ItemType) {
    let items = app.visible_items(kind);
    let total = app.total_items(kind);
    ItemListPage::new(kind, app.screen(kind), &items, total, tui.list_mut(kind))
        .render(frame, area);
}

fn key_hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Lost | Tab::Found => {
            "type to search · ←→ category · Ctrl+S status · ↑↓ select · Enter open · F1-F4 tabs"
        }
        Tab::Post => "Tab/↑↓ field · ←→ choose · Ctrl+J newline · Enter next/submit · F1-F4 tabs",
        Tab::Info => "↑↓ PgUp PgDn scroll · F1-F4 tabs · Ctrl+C quit",
    }
}

fn draw_hints(frame: &mut Frame, area: Rect, hints: &str) {
    frame.render_widget(Span::styled(hints, Style::default().fg(Color::DarkGray)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::screen::Notice;
    use crate::test_support::test_app;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_start_screen_is_lost_list() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Campus Lost & Found"));
        assert!(text.contains("Welcome to Campus Lost & Found!"));
        assert!(text.contains("Silver AirPods Pro"));
        assert!(!text.contains("Gold Ring"));
        assert!(text.contains("F2 Found Items"));
    }

    #[test]
    fn test_detail_hides_tab_bar() {
        let mut app = test_app();
        let item = app.store.find_item("6").unwrap();
        update(&mut app, Action::OpenItem(item));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Gold Ring"));
        assert!(text.contains("This Is Mine!"));
        assert!(!text.contains("F1 Lost Items"));
    }

    #[test]
    fn test_notice_overlays_screen() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Info));
        app.notice = Some(Notice::error("Please select a category"));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Please select a category"));
        assert!(text.contains("About This App"));
    }

    #[test]
    fn test_post_tab_shows_form() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Post));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Report an Item"));
    }
}
