//! Input handling for the folio TUI.
//!
//! The terminal event stream is the page's only external signal source, so
//! its reader is treated as a scoped acquisition: [`InputPump::new`] spawns
//! the blocking reader, and [`InputPump::shutdown`] must run on every exit
//! path of the run loop. `Drop` raises the stop flag as a backstop for early
//! exits, but a leaked reader is a resource leak, not a tolerable side
//! effect.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::{App, Focus};
use folio_types::Section;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Rows scrolled per arrow key / page key.
const SCROLL_STEP: i32 = 1;
const SCROLL_PAGE: i32 = 10;

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Release the reader: close the channel so a backpressured send
    /// unblocks, raise the stop flag, and wait for the task to finish.
    pub async fn shutdown(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
        debug!("input pump shut down");
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued events into app transitions. Returns true when the app
/// should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if let Event::Key(key) = ev {
            if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                handle_key(app, key);
            }
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.nav().is_menu_open() {
        handle_menu_key(app, key.code);
        return;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Esc => app.blur(),
        KeyCode::Up => app.scroll_by(-SCROLL_STEP),
        KeyCode::Down => app.scroll_by(SCROLL_STEP),
        KeyCode::PageUp => app.scroll_by(-SCROLL_PAGE),
        KeyCode::PageDown => app.scroll_by(SCROLL_PAGE),
        _ => match app.focus() {
            Focus::Page => handle_page_key(app, key.code),
            Focus::Name | Focus::Email | Focus::Message => handle_field_key(app, key.code),
            Focus::Submit => handle_submit_key(app, key.code),
        },
    }
}

/// Menu mode: numbered selection, everything else closes or is ignored.
fn handle_menu_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(ch @ '1'..='4') => {
            let index = (ch as usize) - ('1' as usize);
            app.select_link(Section::ALL[index]);
        }
        KeyCode::Char('m') | KeyCode::Esc => app.toggle_menu(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_page_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('r') => app.reset_form(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        _ => {}
    }
}

fn handle_field_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(ch) => app.insert_char(ch),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Enter => {
            // Newline in the message body; elsewhere Enter advances focus,
            // matching how forms behave everywhere else.
            if app.focus() == Focus::Message {
                app.insert_char('\n');
            } else {
                app.focus_next();
            }
        }
        _ => {}
    }
}

fn handle_submit_key(app: &mut App, code: KeyCode) {
    match code {
        // The control is a real disabled control while a send is pending or
        // delivered: Enter must not fire until reset() re-arms the form.
        KeyCode::Enter => {
            if !app.submit_disabled() {
                app.submit();
            }
        }
        KeyCode::Char('r') => app.reset_form(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
