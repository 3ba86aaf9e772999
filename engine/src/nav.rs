//! Scroll-driven navigation bar state.
//!
//! Two flags, each with a single writer: `scrolled` is derived from the page
//! scroll offset on every scroll event, `menu_open` changes only through an
//! explicit toggle or a link selection.

use folio_types::Section;
use tracing::debug;

/// Offset (in rows) past which the bar switches to its scrolled styling.
pub const SCROLL_THRESHOLD: u16 = 50;

/// Navigation bar controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavBar {
    menu_open: bool,
    scrolled: bool,
}

impl NavBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the scrolled flag from the current offset.
    ///
    /// Unconditional on every call: there is no hysteresis and no caching
    /// across frames. Arbitrarily frequent calls are fine; this is a single
    /// comparison.
    pub fn on_scroll(&mut self, offset: u16) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }

    /// Flip the collapsible menu. No guards; callable at any time.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "menu toggled");
    }

    /// Activate a navigation link, returning the anchor intent for the view
    /// layer to resolve.
    ///
    /// The menu is closed FIRST, unconditionally: an open menu must never
    /// survive a navigation intent, even when it was already closed.
    pub fn select_link(&mut self, section: Section) -> Section {
        self.menu_open = false;
        debug!(anchor = section.anchor(), "nav link selected");
        section
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
