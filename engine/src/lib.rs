//! Application state machine for folio.
//!
//! This crate contains the page's interactive state without TUI dependencies:
//!
//! - **Navigation bar**: scroll-derived styling flag plus the collapsible
//!   menu ([`NavBar`])
//! - **Contact form**: the submission lifecycle state machine
//!   ([`ContactForm`]) and its async transport seam ([`Transport`])
//! - **Field buffers**: plain text editing state for the form inputs
//! - **Content config**: built-in site content with an optional TOML override
//!
//! The TUI layer (`folio_tui`) reads state from [`App`] and forwards input
//! back to it. No rendering logic lives in this crate.
//!
//! State is mutated only through named operations on the owning controller;
//! every struct keeps its fields private so transition rules cannot be
//! bypassed from outside.

mod app;
mod config;
mod fields;
mod form;
mod nav;
mod transport;

pub use app::App;
pub use config::{ConfigError, SiteConfig};
pub use fields::{FieldBuffer, Focus, FormFields};
pub use form::{ContactForm, SubmissionState, SubmitError};
pub use nav::{NavBar, SCROLL_THRESHOLD};
pub use transport::{DEFAULT_SEND_LATENCY, FixedDelayTransport, SendError, Transport};

// Re-export domain types for downstream convenience.
pub use folio_types::{
    EmailAddress, Field, FormInput, Profile, Project, Section, SiteContent, SkillGroup,
    SocialLink, ValidationError,
};

#[cfg(test)]
mod tests;
