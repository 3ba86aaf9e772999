//! Contact form rendering.
//!
//! Pure projection of engine state: field buffers with a cursor for the
//! focused field, a submit control that reflects the submission lifecycle,
//! and one status line for validation errors or the send outcome.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_engine::{App, FieldBuffer, Focus, SubmissionState};

use crate::theme::Palette;

const CURSOR: char = '█';

/// Lines for the contact section body (the page builder adds padding).
#[must_use]
pub fn lines(app: &App, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        "My inbox is always open. Whether you have a question or just want to say hi, \
         I'll try my best to get back to you!"
            .to_string(),
        palette.muted(),
    )));
    out.push(Line::from(""));

    let fields = app.fields();
    let focus = app.focus();
    out.extend(field_lines(
        "Name",
        fields.name(),
        focus == Focus::Name,
        palette,
    ));
    out.extend(field_lines(
        "Email",
        fields.email(),
        focus == Focus::Email,
        palette,
    ));
    out.extend(field_lines(
        "Message",
        fields.message(),
        focus == Focus::Message,
        palette,
    ));
    out.push(Line::from(""));

    out.push(submit_line(app, palette));

    if let Some(status) = status_line(app, palette) {
        out.push(Line::from(""));
        out.push(status);
    }

    out.push(Line::from(""));
    out.push(Line::from(Span::styled(
        hint_text(app, width),
        Style::default().fg(palette.text_disabled),
    )));

    out
}

/// One line per row of the field's value; the focused field shows a block
/// cursor at the edit position.
fn field_lines(
    label: &str,
    buffer: &FieldBuffer,
    focused: bool,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let label_style = if focused {
        palette.accent_bold()
    } else {
        palette.muted()
    };
    let value_style = palette.body();

    let mut value = buffer.text().to_string();
    if focused {
        let byte = value
            .char_indices()
            .map(|(i, _)| i)
            .nth(buffer.cursor())
            .unwrap_or(value.len());
        value.insert(byte, CURSOR);
    }

    let mut rows = Vec::new();
    for (i, row) in value.split('\n').enumerate() {
        let prefix = if i == 0 {
            format!("{label:<8} ")
        } else {
            " ".repeat(9)
        };
        rows.push(Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(row.to_string(), value_style),
        ]));
    }
    rows
}

fn submit_line(app: &App, palette: &Palette) -> Line<'static> {
    let focused = app.focus() == Focus::Submit;
    let (text, mut style) = match app.submission() {
        SubmissionState::Submitting => (
            "[ Sending... ]".to_string(),
            Style::default().fg(palette.text_disabled),
        ),
        SubmissionState::Succeeded => (
            "[ ✓ Message Sent ]".to_string(),
            Style::default().fg(palette.accent_dim),
        ),
        SubmissionState::Idle | SubmissionState::Failed(_) => {
            ("[ Send Message ]".to_string(), palette.accent_bold())
        }
    };
    if focused && !app.submit_disabled() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(Span::styled(text, style))
}

fn status_line(app: &App, palette: &Palette) -> Option<Line<'static>> {
    if let Some(err) = app.validation_error() {
        return Some(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(palette.error),
        )));
    }
    match app.submission() {
        SubmissionState::Succeeded => Some(Line::from(Span::styled(
            "Thanks for reaching out! I'll get back to you soon.".to_string(),
            palette.accent(),
        ))),
        SubmissionState::Failed(reason) => Some(Line::from(Span::styled(
            format!("Sending failed: {reason}. Press Enter to retry."),
            Style::default().fg(palette.error),
        ))),
        SubmissionState::Idle | SubmissionState::Submitting => None,
    }
}

fn hint_text(app: &App, width: usize) -> String {
    let hint = if app.submission().is_resolved() {
        "tab: fields · r: new form · m: menu · q: quit"
    } else {
        "tab: fields · enter: send · m: menu · q: quit"
    };
    // Drop the hint on absurdly narrow panes instead of wrapping it badly.
    if width < 20 {
        String::new()
    } else {
        hint.to_string()
    }
}
