//! # Item Detail Page
//!
//! Full-screen view of one listing: header, description, details, the
//! contact card, and the action keys. The body scrolls; the offset is
//! borrowed from `TuiState` and clamped to the wrapped content height.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::core::action::respond_label;
use crate::core::item::{Item, ItemType};
use crate::tui::component::Component;
use crate::tui::components::item_list::status_badge;

pub struct ItemDetailPage<'a> {
    pub item: &'a Item,
    pub scroll: &'a mut u16,
}

impl<'a> ItemDetailPage<'a> {
    pub fn new(item: &'a Item, scroll: &'a mut u16) -> Self {
        Self { item, scroll }
    }

    fn header(&self) -> Vec<Line<'a>> {
        let marker = match self.item.kind {
            ItemType::Lost => Span::styled("❌ Lost", Style::default().fg(Color::Red)),
            ItemType::Found => Span::styled("✅ Found", Style::default().fg(Color::Green)),
        };
        let (badge, badge_style) = status_badge(self.item.status);
        vec![
            Line::from(vec![marker, Span::raw("   "), Span::styled(badge, badge_style)]),
            Line::from(Span::styled(
                self.item.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ]
    }

    fn body(&self) -> Vec<Line<'a>> {
        let section = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White);
        let item = self.item;

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled("Description", section)));
        for text in item.description.lines() {
            lines.push(Line::from(Span::styled(text, value)));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("Details", section)));
        for (icon, name, text) in [
            ("🏷️ ", "Category", item.category.to_string()),
            ("📍", "Location", item.location.clone()),
            ("📅", "Date Posted", item.long_date()),
        ] {
            lines.push(Line::from(vec![
                Span::raw(format!("{icon} ")),
                Span::styled(format!("{name}: "), label),
                Span::styled(text, value),
            ]));
        }
        if let Some(image) = &item.image {
            lines.push(Line::from(vec![
                Span::raw("🖼️  "),
                Span::styled("Image: ", label),
                Span::styled(image.as_str(), value),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled("Contact Information", section)));
        lines.push(Line::from(Span::styled(
            item.contact_name.as_str(),
            value.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::raw("📧 "),
            Span::styled(item.contact_email.as_str(), value),
        ]));
        lines.push(Line::from(vec![
            Span::raw("📱 "),
            Span::styled(item.contact_phone.as_str(), value),
        ]));
        lines
    }

    fn actions(&self) -> Line<'a> {
        let key = Style::default().fg(Color::Black).bg(Color::Cyan);
        let text = Style::default().fg(Color::Gray);
        Line::from(vec![
            Span::styled(" e ", key),
            Span::styled(" Email  ", text),
            Span::styled(" p ", key),
            Span::styled(" Call  ", text),
            Span::styled(" r ", key),
            Span::styled(format!(" {}  ", respond_label(self.item)), text),
            Span::styled(" s ", key),
            Span::styled(" Share This Item  ", text),
            Span::styled(" Esc ", key),
            Span::styled(" Back", text),
        ])
    }
}

impl Component for ItemDetailPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header_area, body_area, actions_area] =
            Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);

        let header = Paragraph::new(self.header())
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, header_area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(body_area);
        let body = Paragraph::new(self.body()).wrap(Wrap { trim: false });

        // Clamp so the last line can't scroll above the bottom edge
        let content_height = body.line_count(inner.width) as u16;
        let max_scroll = content_height.saturating_sub(inner.height);
        *self.scroll = (*self.scroll).min(max_scroll);

        frame.render_widget(body.scroll((*self.scroll, 0)).block(block), body_area);
        frame.render_widget(Paragraph::new(self.actions()), actions_area);
    }
}
