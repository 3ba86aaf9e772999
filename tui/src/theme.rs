//! Color theme for the folio TUI.
//!
//! Slate/emerald palette matching the site's original look.

use ratatui::style::{Color, Modifier, Style};

/// Palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (slate) ===
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42); // slate-900
    pub const BG_PANEL: Color = Color::Rgb(30, 41, 59); // slate-800
    pub const BG_BORDER: Color = Color::Rgb(51, 65, 85); // slate-700

    // === Foregrounds ===
    pub const TEXT_HEADING: Color = Color::Rgb(241, 245, 249); // slate-100
    pub const TEXT_PRIMARY: Color = Color::Rgb(203, 213, 225); // slate-300
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // slate-500
    pub const TEXT_DISABLED: Color = Color::Rgb(71, 85, 105); // slate-600

    // === Accents ===
    pub const ACCENT: Color = Color::Rgb(52, 211, 153); // emerald-400
    pub const ACCENT_DIM: Color = Color::Rgb(16, 185, 129); // emerald-500
    pub const ERROR: Color = Color::Rgb(248, 113, 113); // red-400
    pub const WARNING: Color = Color::Rgb(250, 204, 21); // yellow-400
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_heading: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub accent: Color,
    pub accent_dim: Color,
    pub error: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_heading: colors::TEXT_HEADING,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            accent: colors::ACCENT,
            accent_dim: colors::ACCENT_DIM,
            error: colors::ERROR,
            warning: colors::WARNING,
        }
    }

    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_heading)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn accent_bold(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
