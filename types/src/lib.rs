//! Core domain types for folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: the site content that the page projects, the section anchors
//! the navigation bar links to, and the contact-form input with its
//! validation rules. Everything here can be used from any layer of the
//! application.

mod content;
mod form;

pub use content::{Profile, Project, Section, SiteContent, SkillGroup, SocialLink};
pub use form::{EmailAddress, Field, FormInput, ValidationError};
