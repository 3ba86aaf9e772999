//! Navigation bar and the collapsible menu overlay.
//!
//! The bar restyles itself from the scroll-derived flag: transparent at the
//! top of the page, solid panel with a rule once scrolled past the threshold.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use folio_engine::App;
use folio_types::Section;

use crate::theme::Palette;

/// Rows the bar occupies at the top of the frame.
pub const NAVBAR_HEIGHT: u16 = 2;

pub fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let scrolled = app.nav().is_scrolled();

    let bg = if scrolled {
        Style::default().bg(palette.bg_panel)
    } else {
        Style::default().bg(palette.bg_dark)
    };

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(
            "SK.",
            palette.accent_bold().add_modifier(Modifier::ITALIC),
        ),
        Span::raw("   "),
    ];
    for section in Section::ALL {
        spans.push(Span::styled(section.label().to_string(), palette.body()));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("≡ m", palette.muted()));

    let block = if scrolled {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(palette.bg_border))
            .style(bg)
    } else {
        Block::default().style(bg)
    };

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Numbered link list shown while the menu is open. Selecting an entry (or
/// pressing `m`/Esc) closes it.
pub fn draw_menu(frame: &mut Frame, palette: &Palette) {
    let area = menu_area(frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}  ", i + 1), palette.accent_bold()),
            Span::styled(section.label().to_string(), palette.body()),
            Span::styled(format!("  {}", section.anchor()), palette.muted()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        " m/esc  close",
        Style::default().fg(palette.text_disabled),
    )));

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg_panel));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn menu_area(frame_area: Rect) -> Rect {
    let width = 28.min(frame_area.width);
    let y = NAVBAR_HEIGHT.min(frame_area.height);
    let height = (Section::ALL.len() as u16 + 3).min(frame_area.height.saturating_sub(y));
    let x = frame_area.width.saturating_sub(width + 1);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::menu_area;
    use ratatui::layout::Rect;

    #[test]
    fn menu_fits_inside_small_frames() {
        for (w, h) in [(80, 24), (20, 5), (5, 3), (0, 0)] {
            let frame = Rect::new(0, 0, w, h);
            let menu = menu_area(frame);
            assert!(menu.right() <= frame.right());
            assert!(menu.bottom() <= frame.bottom());
        }
    }
}
