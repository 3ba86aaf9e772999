//! Single-page layout: every section rendered into one scrollable column.
//!
//! The page is rebuilt each frame from the engine state. Building records the
//! first row of every section so anchor intents resolve to scroll offsets.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use folio_engine::App;
use folio_types::Section;

use crate::contact;
use crate::theme::Palette;

/// Left padding for page content.
const PAD: &str = "  ";
/// Columns reserved for padding on both sides.
const PAD_COLS: usize = 4;

/// A fully built page: styled lines plus the section anchor rows.
pub struct Page {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
}

impl Page {
    #[must_use]
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Row of a section's first line. Anchors are recorded for every section,
    /// so a miss can only mean a section was never built; fall back to top.
    #[must_use]
    pub fn anchor_row(&self, section: Section) -> u16 {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, row)| *row)
    }
}

/// Accumulates styled lines and remembers section start rows.
struct PageBuilder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
    width: usize,
}

impl PageBuilder {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            width: (width as usize).saturating_sub(PAD_COLS).max(20),
        }
    }

    fn mark(&mut self, section: Section) {
        self.anchors.push((section, self.lines.len() as u16));
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn push(&mut self, line: Line<'static>) {
        let mut spans = vec![Span::raw(PAD)];
        spans.extend(line.spans);
        self.lines.push(Line::from(spans));
    }

    fn styled(&mut self, text: impl Into<String>, style: Style) {
        self.push(Line::from(Span::styled(text.into(), style)));
    }

    fn wrapped(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.styled(row, style);
        }
    }

    /// Section heading in the site's style: title plus a trailing rule.
    fn heading(&mut self, title: &str, palette: &Palette) {
        let rule_width = self.width.saturating_sub(title.width() + 1).min(24);
        self.push(Line::from(vec![
            Span::styled(title.to_string(), palette.heading()),
            Span::raw(" "),
            Span::styled("─".repeat(rule_width), Style::default().fg(palette.bg_border)),
        ]));
    }
}

/// Build the whole page for the given viewport width.
#[must_use]
pub fn build(app: &App, width: u16, palette: &Palette) -> Page {
    let mut b = PageBuilder::new(width);
    let content = app.content();
    let profile = &content.profile;

    // --- Hero ---
    b.blank();
    b.blank();
    b.styled("Hi, my name is", palette.accent());
    b.styled(format!("{}.", profile.name), palette.heading());
    b.styled("I build things for the web.", palette.muted());
    b.blank();
    b.wrapped(&profile.tagline, palette.body());
    b.blank();
    b.styled(
        format!("{} · scroll down, or press m for the menu", profile.role),
        palette.muted(),
    );
    b.blank();
    b.blank();

    // --- About ---
    b.mark(Section::About);
    b.heading("About Me", palette);
    b.blank();
    for paragraph in &profile.about {
        b.wrapped(paragraph, palette.body());
        b.blank();
    }
    b.blank();

    // --- Skills ---
    b.mark(Section::Skills);
    b.heading("Technical Skills", palette);
    b.blank();
    for group in &content.skills {
        b.styled(group.name.clone(), palette.accent_bold());
        for item in &group.items {
            b.push(Line::from(vec![
                Span::styled("· ", palette.accent()),
                Span::styled(item.clone(), palette.body()),
            ]));
        }
        b.blank();
    }
    b.blank();

    // --- Projects ---
    b.mark(Section::Projects);
    b.heading("Featured Projects", palette);
    b.blank();
    for project in &content.projects {
        b.styled(project.title.clone(), palette.accent_bold());
        b.wrapped(&project.description, palette.body());
        b.styled(project.tags.join("  "), palette.muted());
        if let Some(repo) = &project.repo {
            b.styled(repo.clone(), palette.muted());
        }
        b.blank();
    }
    b.blank();

    // --- Contact ---
    b.mark(Section::Contact);
    b.heading("Get In Touch", palette);
    b.blank();
    for line in contact::lines(app, b.width, palette) {
        b.push(line);
    }
    b.blank();
    b.blank();

    // --- Footer ---
    for social in &profile.socials {
        b.push(Line::from(vec![
            Span::styled(format!("{}  ", social.name), palette.accent()),
            Span::styled(social.url.clone(), palette.muted()),
        ]));
    }
    b.blank();
    b.styled(
        format!("Designed & Built by {}", profile.name),
        palette.muted(),
    );
    b.blank();

    Page {
        lines: b.lines,
        anchors: b.anchors,
    }
}

/// Render the window of the page at the given scroll offset.
pub fn render(frame: &mut Frame, page: &Page, offset: u16, area: Rect, palette: &Palette) {
    let start = (offset as usize).min(page.lines.len());
    let end = (start + area.height as usize).min(page.lines.len());
    let visible: Vec<Line<'static>> = page.lines[start..end].to_vec();
    let paragraph =
        Paragraph::new(Text::from(visible)).style(Style::default().bg(palette.bg_dark));
    frame.render_widget(paragraph, area);
}

/// Greedy word wrap by display width. Explicit newlines are honored; words
/// longer than the width get a row of their own rather than being split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.width() + 1 + word.width() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                rows.push(current);
                current = word.to_string();
            }
        }
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{build, wrap_text};
    use crate::theme::Palette;
    use folio_engine::App;
    use folio_types::{Section, SiteContent};

    #[test]
    fn wrap_respects_width() {
        let rows = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.chars().count() <= 10, "row too wide: {row:?}");
        }
    }

    #[test]
    fn wrap_honors_explicit_newlines() {
        let rows = wrap_text("one\ntwo", 40);
        assert_eq!(rows, ["one", "two"]);
    }

    #[test]
    fn wrap_keeps_overlong_word_whole() {
        let rows = wrap_text("antidisestablishmentarianism", 5);
        assert_eq!(rows, ["antidisestablishmentarianism"]);
    }

    #[test]
    fn every_section_gets_an_anchor_in_page_order() {
        let app = App::new(SiteContent::default());
        let page = build(&app, 80, &Palette::standard());

        let rows: Vec<u16> = [
            Section::About,
            Section::Skills,
            Section::Projects,
            Section::Contact,
        ]
        .into_iter()
        .map(|s| page.anchor_row(s))
        .collect();

        for pair in rows.windows(2) {
            assert!(pair[0] < pair[1], "anchors out of order: {rows:?}");
        }
        assert!(rows[3] < page.height());
    }

    #[test]
    fn narrow_viewport_does_not_panic() {
        let app = App::new(SiteContent::default());
        let page = build(&app, 10, &Palette::standard());
        assert!(page.height() > 0);
    }
}
