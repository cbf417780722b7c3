//! # TextField Component
//!
//! A labelled, bordered text box. Used by the list search bars and the post
//! form. The value is a prop owned by core state; edits arrive as
//! `Action`s, so the field only draws and places the cursor.
//!
//! Editing is append-only (type, paste, backspace, clear), so the cursor
//! always sits after the last character.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub required: bool,
    pub multiline: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            required: false,
            multiline: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Rows a field of this kind occupies, borders included.
    pub fn height(multiline: bool) -> u16 {
        if multiline { 5 } else { 3 }
    }

    fn title(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(format!(" {}", self.label))];
        if self.required {
            spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    /// Shows the tail of single-line values that overflow the box.
    fn visible_value(&self, inner_width: usize) -> &'a str {
        if self.multiline || self.value.width() < inner_width {
            return self.value;
        }
        let mut start = 0;
        for (idx, _) in self.value.char_indices() {
            if self.value[idx..].width() < inner_width {
                start = idx;
                break;
            }
        }
        &self.value[start..]
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title());

        let inner = block.inner(area);
        let shown = self.visible_value(inner.width as usize);

        let paragraph = if shown.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Paragraph::new(shown).style(Style::default().fg(Color::White))
        };
        let paragraph = if self.multiline {
            paragraph.wrap(Wrap { trim: false })
        } else {
            paragraph
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let (col, row) = cursor_offset(shown, inner.width, self.multiline);
            let row = row.min(inner.height - 1);
            frame.set_cursor_position((inner.x + col.min(inner.width - 1), inner.y + row));
        }
    }
}

/// Column/row of the end of `text` inside a box `width` columns wide.
fn cursor_offset(text: &str, width: u16, multiline: bool) -> (u16, u16) {
    if !multiline {
        return (text.width() as u16, 0);
    }
    let width = width.max(1) as usize;
    let options = textwrap::Options::new(width).break_words(true);
    let lines = textwrap::wrap(text, options);
    let last = lines.last().map(|l| l.width()).unwrap_or(0);
    let mut row = lines.len().saturating_sub(1);
    let mut col = last;
    // A trailing newline already yields an empty last line from textwrap
    if col >= width {
        row += 1;
        col = 0;
    }
    (col as u16, row as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(field: &mut TextField, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| field.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut field = TextField::new("Title", "").placeholder("e.g., Keys").required(true);
        let terminal = draw(&mut field, 40, 3);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Title *"));
        assert!(text.contains("e.g., Keys"));
    }

    #[test]
    fn test_value_replaces_placeholder() {
        let mut field = TextField::new("Search", "ring").placeholder("Search lost items...");
        let terminal = draw(&mut field, 40, 3);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("ring"));
        assert!(!text.contains("Search lost items"));
    }

    #[test]
    fn test_long_value_shows_tail() {
        let field = TextField::new("Title", "abcdefghij");
        assert_eq!(field.visible_value(5), "ghij");
        assert_eq!(field.visible_value(20), "abcdefghij");
    }

    #[test]
    fn test_cursor_offset() {
        assert_eq!(cursor_offset("abc", 10, false), (3, 0));
        assert_eq!(cursor_offset("abc\n", 10, true), (0, 1));
        assert_eq!(cursor_offset("abcd", 4, true), (0, 1));
        assert_eq!(cursor_offset("", 4, true), (0, 0));
    }
}
