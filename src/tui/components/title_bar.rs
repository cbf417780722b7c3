//! # TitleBar Component
//!
//! Top status bar showing the app name, the current status message, and a
//! marker while a post is in flight.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), app.form.is_submitting);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Posting**: `"Campus Lost & Found | Posting... | ⏳"`
//! 2. **Status message**: `"Campus Lost & Found | Posted \"Keys\" to Lost Items"`
//! 3. **Default**: `"Campus Lost & Found"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const APP_TITLE: &str = "Campus Lost & Found";

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g., "Posting...", "Showing: Active")
    pub status_message: String,
    /// Whether a post is waiting for acknowledgement
    pub is_posting: bool,
}

impl TitleBar {
    pub fn new(status_message: String, is_posting: bool) -> Self {
        Self {
            status_message,
            is_posting,
        }
    }

    fn text(&self) -> String {
        if self.is_posting {
            format!("{} | {} | ⏳", APP_TITLE, self.status_message)
        } else if self.status_message.is_empty() {
            APP_TITLE.to_string()
        } else {
            format!("{} | {}", APP_TITLE, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        let text = format!("{:<width$}", self.text(), width = area.width as usize);
        frame.render_widget(Span::styled(text, style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = rendered(TitleBar::new("Showing: Active".to_string(), false));
        assert!(text.contains("Campus Lost & Found"));
        assert!(text.contains("Showing: Active"));
        assert!(!text.contains('⏳'));
    }

    #[test]
    fn test_title_bar_posting_marker() {
        let text = rendered(TitleBar::new("Posting...".to_string(), true));
        assert!(text.contains("Posting..."));
        assert!(text.contains('⏳'));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = rendered(TitleBar::new(String::new(), false));
        assert!(text.contains("Campus Lost & Found"));
        assert!(!text.contains('|'));
    }
}
