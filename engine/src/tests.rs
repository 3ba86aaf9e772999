//! App-level tests for the engine crate.

use std::time::Duration;

use folio_types::{Field, Section, SiteContent, ValidationError};

use crate::app::App;
use crate::fields::Focus;
use crate::form::SubmissionState;

fn test_app() -> App {
    App::new(SiteContent::default())
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.insert_char(ch);
    }
}

/// Fill all three fields with valid content and land focus on Submit.
fn fill_valid_form(app: &mut App) {
    app.focus_next(); // Name
    type_str(app, "John Doe");
    app.focus_next(); // Email
    type_str(app, "john@example.com");
    app.focus_next(); // Message
    type_str(app, "Hello!");
    app.focus_next(); // Submit
    assert_eq!(app.focus(), Focus::Submit);
}

async fn tick_until_resolved(app: &mut App) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !app.submission().is_resolved() {
            app.tick();
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("submission should resolve");
}

#[tokio::test(start_paused = true)]
async fn successful_submit_clears_fields_and_disables_resubmit() {
    let mut app = test_app();
    fill_valid_form(&mut app);

    app.submit();
    assert_eq!(*app.submission(), SubmissionState::Submitting);
    assert!(app.submit_disabled());

    tick_until_resolved(&mut app).await;
    assert_eq!(*app.submission(), SubmissionState::Succeeded);
    assert!(app.submit_disabled());
    assert_eq!(app.fields().input().name, "");
    assert_eq!(app.fields().input().email, "");
    assert_eq!(app.fields().input().message, "");

    app.reset_form();
    assert_eq!(*app.submission(), SubmissionState::Idle);
    assert!(!app.submit_disabled());
}

#[tokio::test(start_paused = true)]
async fn invalid_submit_surfaces_error_until_next_edit() {
    let mut app = test_app();
    app.focus_next(); // Name left empty
    app.focus_next(); // Email
    type_str(&mut app, "john@example.com");
    app.focus_next(); // Message
    type_str(&mut app, "Hello!");

    app.submit();
    assert_eq!(*app.submission(), SubmissionState::Idle);
    assert_eq!(
        app.validation_error(),
        Some(&ValidationError::Empty(Field::Name))
    );

    // Editing any field clears the inline error.
    app.insert_char('x');
    assert_eq!(app.validation_error(), None);
}

#[tokio::test(start_paused = true)]
async fn duplicate_submit_while_in_flight_is_suppressed() {
    let mut app = test_app();
    fill_valid_form(&mut app);

    app.submit();
    app.submit();
    assert_eq!(*app.submission(), SubmissionState::Submitting);

    tick_until_resolved(&mut app).await;
    assert_eq!(*app.submission(), SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn select_link_closes_menu_and_queues_anchor() {
    let mut app = test_app();
    app.toggle_menu();
    assert!(app.nav().is_menu_open());

    app.select_link(Section::Skills);
    assert!(!app.nav().is_menu_open());
    assert_eq!(app.take_pending_anchor(), Some(Section::Skills));
    // Take is one-shot.
    assert_eq!(app.take_pending_anchor(), None);
}

#[tokio::test(start_paused = true)]
async fn scrolling_feeds_the_nav_controller() {
    let mut app = test_app();
    app.set_scroll_max(200);

    app.scroll_to(120);
    assert!(app.nav().is_scrolled());

    app.scroll_to(10);
    assert!(!app.nav().is_scrolled());

    app.scroll_by(55);
    assert_eq!(app.scroll_offset(), 65);
    assert!(app.nav().is_scrolled());

    app.scroll_by(-500);
    assert_eq!(app.scroll_offset(), 0);
    assert!(!app.nav().is_scrolled());

    app.scroll_to_bottom();
    assert_eq!(app.scroll_offset(), 200);
}

#[tokio::test(start_paused = true)]
async fn shrinking_scroll_max_clamps_and_rederives() {
    let mut app = test_app();
    app.set_scroll_max(200);
    app.scroll_to(180);
    assert!(app.nav().is_scrolled());

    app.set_scroll_max(30);
    assert_eq!(app.scroll_offset(), 30);
    assert!(!app.nav().is_scrolled());
}

#[tokio::test(start_paused = true)]
async fn keystrokes_only_reach_text_fields() {
    let mut app = test_app();
    assert_eq!(app.focus(), Focus::Page);
    type_str(&mut app, "ignored");
    assert_eq!(app.fields().input().name, "");

    app.focus_next();
    type_str(&mut app, "Jo");
    app.backspace();
    assert_eq!(app.fields().input().name, "J");

    app.blur();
    assert_eq!(app.focus(), Focus::Page);
}
