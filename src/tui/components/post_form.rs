//! # Post Form Page
//!
//! The "Report an Item" form. Rows are laid out on a virtual column taller
//! than most terminals; the page shows the window that keeps the focused row
//! (and its section heading) on screen. The window offset is borrowed from
//! `TuiState` and always lands on a row boundary, so rows are drawn whole.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::form::{FormField, PostForm};
use crate::core::item::{Category, ItemType};
use crate::tui::component::Component;
use crate::tui::components::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Heading(&'static str),
    Field(FormField),
}

const ROWS: [Row; 12] = [
    Row::Heading("Item Type"),
    Row::Field(FormField::Type),
    Row::Heading("Item Details"),
    Row::Field(FormField::Title),
    Row::Field(FormField::Description),
    Row::Field(FormField::Category),
    Row::Field(FormField::Location),
    Row::Heading("Contact Information"),
    Row::Field(FormField::ContactName),
    Row::Field(FormField::ContactEmail),
    Row::Field(FormField::ContactPhone),
    Row::Field(FormField::Submit),
];

fn row_height(row: Row) -> u16 {
    match row {
        Row::Heading(_) => 1,
        Row::Field(FormField::Description) => TextField::height(true),
        Row::Field(_) => 3,
    }
}

/// `(row, top, bottom)` for every row on the virtual column.
fn row_spans() -> Vec<(Row, u16, u16)> {
    let mut top = 0;
    ROWS.iter()
        .map(|&row| {
            let bottom = top + row_height(row);
            let span = (row, top, bottom);
            top = bottom;
            span
        })
        .collect()
}

/// Window offset that keeps `focus` visible in a viewport `height` rows tall.
fn scroll_for_focus(scroll: u16, focus: FormField, height: u16) -> u16 {
    let spans = row_spans();
    let Some(idx) = spans.iter().position(|(row, _, _)| *row == Row::Field(focus)) else {
        return 0;
    };
    let (_, mut top, bottom) = spans[idx];
    // Bring the section heading along with the first field under it
    if idx > 0
        && let (Row::Heading(_), heading_top, _) = spans[idx - 1]
    {
        top = heading_top;
    }

    if top < scroll {
        top
    } else if bottom > scroll + height {
        let min_top = bottom.saturating_sub(height);
        spans
            .iter()
            .map(|(_, t, _)| *t)
            .find(|t| *t >= min_top)
            .unwrap_or(top)
    } else {
        scroll
    }
}

pub struct PostFormPage<'a> {
    pub form: &'a PostForm,
    pub scroll: &'a mut u16,
}

impl<'a> PostFormPage<'a> {
    pub fn new(form: &'a PostForm, scroll: &'a mut u16) -> Self {
        Self { form, scroll }
    }

    fn render_row(&self, frame: &mut Frame, row: Row, area: Rect) {
        match row {
            Row::Heading(title) => {
                let heading = Span::styled(
                    title,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                );
                frame.render_widget(Paragraph::new(heading), area);
            }
            Row::Field(FormField::Type) => {
                let choices = [ItemType::Lost, ItemType::Found].map(|kind| {
                    let label = match kind {
                        ItemType::Lost => "❌ Lost",
                        ItemType::Found => "✅ Found",
                    };
                    (label, self.form.item_type == Some(kind))
                });
                self.render_choices(frame, FormField::Type, &choices, area);
            }
            Row::Field(FormField::Category) => {
                let choices = Category::ALL
                    .map(|category| (category.as_str(), self.form.category == Some(category)));
                self.render_choices(frame, FormField::Category, &choices, area);
            }
            Row::Field(FormField::Submit) => self.render_submit(frame, area),
            Row::Field(field) => {
                let value = self.form.text(field).unwrap_or_default();
                TextField::new(field.label(), value)
                    .placeholder(field.placeholder())
                    .required(field.is_required())
                    .multiline(field == FormField::Description)
                    .focused(self.form.focus == field && !self.form.is_submitting)
                    .render(frame, area);
            }
        }
    }

    fn render_choices(
        &self,
        frame: &mut Frame,
        field: FormField,
        choices: &[(&'static str, bool)],
        area: Rect,
    ) {
        let focused = self.form.focus == field;
        let mut spans = Vec::new();
        for (label, selected) in choices {
            let style = if *selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw(" "));
        }

        let mut title = vec![Span::raw(format!(" {}", field.label()))];
        if field.is_required() {
            title.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        title.push(Span::raw(" "));

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(title));
        if focused {
            block = block.title_bottom(Line::from(" ◀ ▶ choose ").right_aligned());
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect) {
        let label = if self.form.is_submitting {
            "⏳ Posting..."
        } else {
            "📤 Post Item"
        };
        let style = if self.form.focus == FormField::Submit {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(button, area);
    }
}

impl Component for PostFormPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header_area, body_area] = Layout::vertical([Length(2), Min(0)]).areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Report an Item",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "📢 Help your community! Post about lost or found items on campus.",
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(header, header_area);

        let height = body_area.height;
        *self.scroll = scroll_for_focus(*self.scroll, self.form.focus, height);
        let scroll = *self.scroll;

        for (row, top, bottom) in row_spans() {
            if top < scroll || bottom > scroll + height {
                continue;
            }
            let row_area = Rect::new(
                body_area.x,
                body_area.y + (top - scroll),
                body_area.width,
                bottom - top,
            );
            self.render_row(frame, row, row_area);
        }
    }
}
