//! # NoticeDialog Component
//!
//! Centered modal for success, error and info messages. Clears what is
//! beneath it and captures input until dismissed with Enter or Esc.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::screen::{Notice, NoticeKind};
use crate::tui::component::Component;

pub struct NoticeDialog<'a> {
    pub notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    fn accent(&self) -> Color {
        match self.notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
            NoticeKind::Info => Color::Cyan,
        }
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl Component for NoticeDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = self.accent();
        let width = area.width.saturating_sub(4).min(60);
        let body = Paragraph::new(vec![
            Line::from(self.notice.message.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] OK",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        // Borders take two columns and two rows
        let height = body.line_count(width.saturating_sub(2)) as u16 + 2;
        let rect = centered_rect(area, width, height);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ", self.notice.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        frame.render_widget(Clear, rect);
        frame.render_widget(body.block(block), rect);
    }
}
