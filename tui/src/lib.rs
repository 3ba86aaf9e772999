//! TUI rendering for folio using ratatui.
//!
//! Stateless projection layer: reads the engine's state each frame, renders
//! the page, and forwards input events back as named transitions. Anchor
//! intents are resolved here because only the renderer knows which row each
//! section landed on.

mod contact;
mod input;
mod navbar;
mod page;
mod theme;

pub use input::{InputPump, handle_events};
pub use navbar::NAVBAR_HEIGHT;
pub use theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use folio_engine::App;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = Palette::standard();

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT), // Nav bar
            Constraint::Min(1),                // Page
        ])
        .split(frame.area());
    let page_area = chunks[1];

    let page = page::build(app, page_area.width, &palette);
    app.set_scroll_max(page.height().saturating_sub(page_area.height));

    // Resolve a queued anchor now that section rows are known. The menu was
    // already closed by the controller when the intent was queued.
    if let Some(section) = app.take_pending_anchor() {
        app.scroll_to(page.anchor_row(section));
    }

    page::render(frame, &page, app.scroll_offset(), page_area, &palette);
    navbar::draw(frame, app, chunks[0], &palette);

    if app.nav().is_menu_open() {
        navbar::draw_menu(frame, &palette);
    }
}
