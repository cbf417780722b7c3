//! # Item List Page
//!
//! Body of the Lost and Found tabs: search box, category chips, counts, and
//! the filtered item cards.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListState` (selection) lives in `TuiState`
//! - `ItemListPage` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::item::{CategoryFilter, Item, ItemStatus, ItemType};
use crate::core::screen::ListScreen;
use crate::tui::component::Component;
use crate::tui::components::text_field::TextField;

pub struct ItemListPage<'a> {
    pub kind: ItemType,
    pub screen: &'a ListScreen,
    /// Items after search and filters.
    pub items: &'a [Item],
    /// Size of the unfiltered collection.
    pub total: usize,
    pub list_state: &'a mut ListState,
}

impl<'a> ItemListPage<'a> {
    pub fn new(
        kind: ItemType,
        screen: &'a ListScreen,
        items: &'a [Item],
        total: usize,
        list_state: &'a mut ListState,
    ) -> Self {
        Self {
            kind,
            screen,
            items,
            total,
            list_state,
        }
    }

    fn noun(&self) -> &'static str {
        match self.kind {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }

    fn render_chips(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("◀ ", Style::default().fg(Color::DarkGray))];
        for choice in CategoryFilter::choices() {
            let style = if choice == self.screen.category {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", choice.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("▶", Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let number = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(format!("Total {}: ", self.kind.label()), label),
            Span::styled(self.total.to_string(), number),
            Span::styled("  │  Shown: ", label),
            Span::styled(self.items.len().to_string(), number),
            Span::styled(format!("  │  {}", self.screen.status_label()), label),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No {} items found", self.noun()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or category filters",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let empty = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(empty, area);
    }

    fn render_items(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(card_lines(item, width.saturating_sub(2))))
            .collect();

        // Keep the selection on a real row after the filters change
        let selected = self
            .list_state
            .selected()
            .unwrap_or(0)
            .min(self.items.len().saturating_sub(1));
        self.list_state.select(Some(selected));

        let list = List::new(items)
            .block(Block::default().borders(Borders::TOP))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌");
        frame.render_stateful_widget(list, area, self.list_state);
    }
}

impl Component for ItemListPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [search_area, chips_area, stats_area, list_area] =
            Layout::vertical([Length(3), Length(1), Length(1), Min(0)]).areas(area);

        let placeholder = match self.kind {
            ItemType::Lost => "Search lost items...",
            ItemType::Found => "Search found items...",
        };
        TextField::new("Search", &self.screen.query)
            .placeholder(placeholder)
            .focused(true)
            .render(frame, search_area);

        self.render_chips(frame, chips_area);
        self.render_stats(frame, stats_area);

        if self.items.is_empty() {
            self.list_state.select(None);
            self.render_empty(frame, list_area);
        } else {
            self.render_items(frame, list_area);
        }
    }
}

/// Two-line card: title with status badge, then category, location and date.
fn card_lines(item: &Item, width: usize) -> Vec<Line<'static>> {
    let (badge, badge_style) = status_badge(item.status);
    let title_width = width.saturating_sub(badge.width() + 1);
    let title = truncate_str(&item.title, title_width);
    let pad = width.saturating_sub(title.width() + badge.width());

    let details = format!(
        "{} · {} · {}",
        item.category,
        item.location,
        item.date.format("%b %-d, %Y")
    );

    vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(pad)),
            Span::styled(badge, badge_style),
        ]),
        Line::from(Span::styled(
            truncate_str(&details, width),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

pub fn status_badge(status: ItemStatus) -> (String, Style) {
    match status {
        ItemStatus::Active => ("● Active".to_string(), Style::default().fg(Color::Blue)),
        ItemStatus::Resolved => ("✔ Resolved".to_string(), Style::default().fg(Color::Green)),
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let budget = max_width - 3;
    for c in s.chars() {
        let mut next = out.clone();
        next.push(c);
        if next.width() > budget {
            break;
        }
        out = next;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::Category;
    use crate::core::query;
    use crate::core::store::seed_items;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_page(kind: ItemType, screen: &ListScreen, items: &[Item], total: usize) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ListState::default();
        terminal
            .draw(|f| {
                ItemListPage::new(kind, screen, items, total, &mut state).render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_cards_and_counts() {
        let screen = ListScreen::new();
        let found: Vec<Item> = seed_items()
            .into_iter()
            .filter(|i| i.kind == ItemType::Found)
            .collect();
        let text = render_page(ItemType::Found, &screen, &found, 3);
        assert!(text.contains("Gold Ring"));
        assert!(text.contains("Red Water Bottle"));
        assert!(text.contains("Total Found: 3"));
        assert!(text.contains("Shown: 3"));
        assert!(text.contains("Search found items..."));
    }

    #[test]
    fn test_empty_state() {
        let screen = ListScreen {
            query: "zzz".to_string(),
            category: CategoryFilter::Only(Category::Bags),
            status: None,
        };
        let items = query::browse(&seed_items(), &screen.query, &screen.category, None);
        let text = render_page(ItemType::Lost, &screen, &items, 3);
        assert!(text.contains("No lost items found"));
        assert!(text.contains("Try adjusting your search or category filters"));
        assert!(text.contains("Shown: 0"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Gold Ring", 20), "Gold Ring");
        assert_eq!(truncate_str("Silver AirPods Pro", 10), "Silver ...");
        assert_eq!(truncate_str("abcdef", 2), "..");
    }

    #[test]
    fn test_card_shows_status_badge() {
        let jacket = seed_items().remove(2);
        let lines = card_lines(&jacket, 60);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.starts_with("Black Winter Jacket"));
        assert!(first.ends_with("✔ Resolved"));
        let second: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(second, "Clothing · Athletic Center - Gym 2 · Feb 22, 2026");
    }
}
