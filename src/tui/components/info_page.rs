//! # Info Page
//!
//! "About This App": intro, quick stats, how it works, and tips. Rendered
//! onto a `ScrollView` canvas sized to the wrapped text, scrolled through the
//! `ScrollViewState` held in `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "1️⃣  Browse",
        "Search through lost and found items posted by other students.",
    ),
    (
        "2️⃣  Post",
        "Report lost or found items with detailed information.",
    ),
    (
        "3️⃣  Connect",
        "Contact the poster to arrange a meetup and reunite items with their owners!",
    ),
];

const TIPS: [&str; 4] = [
    "💡 Be detailed: Include colors, brands, and unique features",
    "💡 Location matters: Specify exact location for better matches",
    "💡 Quick response: Check your messages frequently",
    "💡 Safety first: Meet in public areas on campus",
];

pub struct InfoPage<'a> {
    /// Listings currently in the store, both kinds.
    pub item_count: usize,
    pub state: &'a mut ScrollViewState,
}

impl<'a> InfoPage<'a> {
    pub fn new(item_count: usize, state: &'a mut ScrollViewState) -> Self {
        Self { item_count, state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let title = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let section = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let text = Style::default().fg(Color::Gray);
        let number = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("About This App", title)),
            Line::from(""),
            Line::from(Span::styled("Campus Lost & Found", section)),
            Line::from(Span::styled(
                "🎓 A modern platform for students to report and find lost or found items on campus.",
                text,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Help your community by posting about items you've lost or found!",
                text,
            )),
            Line::from(""),
            Line::from(Span::styled("Quick Stats", section)),
            Line::from(vec![
                Span::styled(self.item_count.to_string(), number),
                Span::styled(" Items Posted    ", text),
                Span::styled("100+", number),
                Span::styled(" Users", text),
            ]),
            Line::from(""),
            Line::from(Span::styled("How It Works", section)),
        ];
        for (step, detail) in HOW_IT_WORKS {
            lines.push(Line::from(Span::styled(step, title)));
            lines.push(Line::from(Span::styled(detail, text)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Tips", section)));
        lines.extend(TIPS.iter().map(|tip| Line::from(Span::styled(*tip, text))));
        lines
    }
}

impl Component for InfoPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column is reserved for the scrollbar
        let content_width = area.width.saturating_sub(1).max(1);
        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, area, self.state);
    }
}
