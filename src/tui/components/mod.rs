//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing the app name and status
//! - `TabBar`: Bottom navigation across the four destinations
//! - `TextField`: Labelled input box used by search bars and the post form
//! - `NoticeDialog`: Modal success/error/info message
//!
//! ### Stateful Components (Borrowed Presentation State)
//!
//! Page bodies that borrow selection or scroll state from `TuiState`:
//! - `ItemListPage`: Search, filter chips, and item cards
//! - `ItemDetailPage`: One listing with its contact actions
//! - `PostFormPage`: The report form, windowed to keep focus visible
//! - `InfoPage`: About text in a scroll view
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reading `App` directly. This keeps dependencies explicit and lets each
//! component be rendered on its own against a `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── tab_bar.rs       (Bottom tab navigation)
//! ├── text_field.rs    (Labelled input box)
//! ├── item_list.rs     (Lost / Found list body)
//! ├── item_detail.rs   (Single listing)
//! ├── post_form.rs     (Report form)
//! ├── info_page.rs     (About screen)
//! └── notice.rs        (Modal overlay)
//! ```

pub mod info_page;
pub mod item_detail;
pub mod item_list;
pub mod notice;
pub mod post_form;
pub mod tab_bar;
pub mod text_field;
pub mod title_bar;

pub use info_page::InfoPage;
pub use item_detail::ItemDetailPage;
pub use item_list::ItemListPage;
pub use notice::NoticeDialog;
pub use post_form::PostFormPage;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;

/// Flattens a rendered buffer into one string, row by row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
