//! Editing state for the contact-form inputs.
//!
//! The buffers own the raw field text; the submission controller only reads
//! a snapshot of it at submit time.

use folio_types::FormInput;

/// What keystrokes are currently routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys scroll the page and drive the menu.
    #[default]
    Page,
    Name,
    Email,
    Message,
    /// The submit control; Enter fires a submission here.
    Submit,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Page => Self::Name,
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Submit,
            Self::Submit => Self::Page,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Page => Self::Submit,
            Self::Name => Self::Page,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Submit => Self::Message,
        }
    }

    #[must_use]
    pub const fn is_text_field(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }
}

/// A single-field text buffer with a char-based cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    cursor: usize,
}

impl FieldBuffer {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the cursor, for splicing into the string.
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let index = self.byte_index();
        self.text.insert(index, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.text.remove(index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let chars = self.text.chars().count();
        self.cursor = (self.cursor + 1).min(chars);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The three contact-form buffers plus the focus cursor.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    name: FieldBuffer,
    email: FieldBuffer,
    message: FieldBuffer,
    focus: Focus,
}

impl FormFields {
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn blur(&mut self) {
        self.focus = Focus::Page;
    }

    #[must_use]
    pub fn name(&self) -> &FieldBuffer {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &FieldBuffer {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &FieldBuffer {
        &self.message
    }

    /// The buffer keystrokes are routed to, if focus is on a text field.
    pub fn focused_mut(&mut self) -> Option<&mut FieldBuffer> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Email => Some(&mut self.email),
            Focus::Message => Some(&mut self.message),
            Focus::Page | Focus::Submit => None,
        }
    }

    /// Snapshot the raw text for a submission attempt.
    #[must_use]
    pub fn input(&self) -> FormInput {
        FormInput {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            message: self.message.text().to_string(),
        }
    }

    /// Wipe all three buffers (required after a successful send).
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldBuffer, Focus, FormFields};

    #[test]
    fn focus_cycle_visits_every_stop() {
        let mut focus = Focus::Page;
        let mut seen = Vec::new();
        for _ in 0..5 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            [
                Focus::Name,
                Focus::Email,
                Focus::Message,
                Focus::Submit,
                Focus::Page
            ]
        );
    }

    #[test]
    fn focus_prev_inverts_next() {
        for focus in [
            Focus::Page,
            Focus::Name,
            Focus::Email,
            Focus::Message,
            Focus::Submit,
        ] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn buffer_edits_at_cursor() {
        let mut buf = FieldBuffer::default();
        for ch in "jhn".chars() {
            buf.insert_char(ch);
        }
        buf.move_left();
        buf.move_left();
        buf.insert_char('o');
        assert_eq!(buf.text(), "john");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut buf = FieldBuffer::default();
        buf.backspace();
        assert_eq!(buf.text(), "");
        buf.insert_char('a');
        buf.move_left();
        buf.backspace();
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn buffer_handles_multibyte_chars() {
        let mut buf = FieldBuffer::default();
        for ch in "héllo".chars() {
            buf.insert_char(ch);
        }
        assert_eq!(buf.text(), "héllo");
        buf.backspace();
        buf.backspace();
        buf.backspace();
        buf.backspace();
        assert_eq!(buf.text(), "h");
    }

    #[test]
    fn snapshot_and_clear() {
        let mut fields = FormFields::default();
        fields.focus_next(); // Name
        for ch in "Jo".chars() {
            fields.focused_mut().expect("name focused").insert_char(ch);
        }
        fields.focus_next(); // Email
        fields.focused_mut().expect("email focused").insert_char('e');

        let input = fields.input();
        assert_eq!(input.name, "Jo");
        assert_eq!(input.email, "e");
        assert_eq!(input.message, "");

        fields.clear();
        assert_eq!(fields.input().name, "");
        // Focus survives a clear; only the text is wiped.
        assert_eq!(fields.focus(), Focus::Email);
    }
}
