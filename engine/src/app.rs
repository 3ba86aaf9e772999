//! Top-level application state.
//!
//! Composes the two controllers with the field buffers and the page scroll
//! position. The controllers do not talk to each other; they only share this
//! struct's lifetime.

use std::sync::Arc;

use tracing::debug;

use folio_types::{Section, SiteContent, ValidationError};

use crate::fields::{Focus, FormFields};
use crate::form::{ContactForm, SubmissionState, SubmitError};
use crate::nav::NavBar;
use crate::transport::{FixedDelayTransport, Transport};

#[derive(Debug)]
pub struct App {
    nav: NavBar,
    form: ContactForm,
    fields: FormFields,
    content: SiteContent,
    scroll_offset: u16,
    scroll_max: u16,
    pending_anchor: Option<Section>,
    last_validation: Option<ValidationError>,
    should_quit: bool,
}

impl App {
    /// App with the stock fixed-delay transport.
    #[must_use]
    pub fn new(content: SiteContent) -> Self {
        Self::with_transport(content, Arc::new(FixedDelayTransport::default()))
    }

    #[must_use]
    pub fn with_transport(content: SiteContent, transport: Arc<dyn Transport>) -> Self {
        Self {
            nav: NavBar::new(),
            form: ContactForm::new(transport),
            fields: FormFields::default(),
            content,
            scroll_offset: 0,
            scroll_max: 0,
            pending_anchor: None,
            last_validation: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Advance per-frame state: drive an outstanding send to resolution.
    pub fn tick(&mut self) {
        if self.form.poll() && matches!(self.form.state(), SubmissionState::Succeeded) {
            self.fields.clear();
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    #[must_use]
    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    /// Activate a nav link: the menu closes first, then the anchor intent is
    /// queued for the view layer to resolve into a scroll offset.
    pub fn select_link(&mut self, section: Section) {
        let target = self.nav.select_link(section);
        self.pending_anchor = Some(target);
    }

    /// Take the queued anchor intent, if any. The view resolves it against
    /// the rendered layout and calls [`scroll_to`](Self::scroll_to).
    pub fn take_pending_anchor(&mut self) -> Option<Section> {
        self.pending_anchor.take()
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// Upper bound for the scroll offset; the view updates it once the page
    /// height and viewport are known.
    pub fn set_scroll_max(&mut self, max: u16) {
        self.scroll_max = max;
        if self.scroll_offset > max {
            self.scroll_to(max);
        }
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.scroll_offset = offset.min(self.scroll_max);
        self.nav.on_scroll(self.scroll_offset);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let offset = i32::from(self.scroll_offset)
            .saturating_add(delta)
            .clamp(0, i32::from(self.scroll_max));
        self.scroll_to(offset as u16);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.scroll_max);
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        self.form.state()
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.form.submit_disabled()
    }

    /// Inline validation error from the last rejected submit, until the next
    /// edit or attempt.
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.last_validation.as_ref()
    }

    /// Submit whatever the buffers currently hold.
    pub fn submit(&mut self) {
        let input = self.fields.input();
        match self.form.submit(&input) {
            Ok(()) => {
                self.last_validation = None;
            }
            Err(SubmitError::Invalid(err)) => {
                self.last_validation = Some(err);
            }
            Err(SubmitError::Busy) => {
                // Duplicate request while in flight; suppress.
                debug!("submit ignored: already in flight");
            }
        }
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
        self.last_validation = None;
    }

    // ------------------------------------------------------------------
    // Field editing
    // ------------------------------------------------------------------

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.fields.focus()
    }

    pub fn focus_next(&mut self) {
        self.fields.focus_next();
    }

    pub fn focus_prev(&mut self) {
        self.fields.focus_prev();
    }

    pub fn blur(&mut self) {
        self.fields.blur();
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(buffer) = self.fields.focused_mut() {
            buffer.insert_char(ch);
            self.last_validation = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.fields.focused_mut() {
            buffer.backspace();
            self.last_validation = None;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(buffer) = self.fields.focused_mut() {
            buffer.move_left();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(buffer) = self.fields.focused_mut() {
            buffer.move_right();
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
