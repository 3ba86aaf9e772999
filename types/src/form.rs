//! Contact-form input and validation.
//!
//! Validation is synchronous and happens once, at submit time. The raw field
//! text is owned by the view-side buffers; nothing here holds live state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three required contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a submission was rejected before any send was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(Field),
    #[error("email address is malformed")]
    Email,
}

/// An email address that passed the well-formedness check.
///
/// The check is a shape test, not RFC 5322: one `@`, a non-empty local part,
/// a dotted domain, and no whitespace anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::Email);
        }
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ValidationError::Email);
        };
        if local.is_empty() || domain.contains('@') {
            return Err(ValidationError::Email);
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(ValidationError::Email);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A snapshot of the contact-form fields, read from the input buffers at
/// submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    /// Check all three fields. Fails on the first violation in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty(Field::Name));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Empty(Field::Email));
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::Empty(Field::Message));
        }
        EmailAddress::parse(&self.email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmailAddress, Field, FormInput, ValidationError};

    fn valid_input() -> FormInput {
        FormInput {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert_eq!(valid_input().validate(), Ok(()));
    }

    #[test]
    fn empty_name_rejected() {
        let mut input = valid_input();
        input.name = String::new();
        assert_eq!(input.validate(), Err(ValidationError::Empty(Field::Name)));
    }

    #[test]
    fn whitespace_only_message_rejected() {
        let mut input = valid_input();
        input.message = "   \n ".to_string();
        assert_eq!(
            input.validate(),
            Err(ValidationError::Empty(Field::Message))
        );
    }

    #[test]
    fn empty_email_reports_missing_not_malformed() {
        let mut input = valid_input();
        input.email = String::new();
        assert_eq!(input.validate(), Err(ValidationError::Empty(Field::Email)));
    }

    #[test]
    fn malformed_email_rejected() {
        let mut input = valid_input();
        input.email = "not-an-address".to_string();
        assert_eq!(input.validate(), Err(ValidationError::Email));
    }

    #[test]
    fn email_shape_accepts_common_addresses() {
        for addr in ["john@example.com", "a.b+tag@mail.co.uk", "x@y.io"] {
            assert!(EmailAddress::parse(addr).is_ok(), "should accept {addr}");
        }
    }

    #[test]
    fn email_shape_rejects_bad_addresses() {
        for addr in [
            "",
            "plain",
            "@example.com",
            "a@b",
            "a@@b.com",
            "a b@example.com",
            "a@.com",
            "a@example.",
        ] {
            assert!(EmailAddress::parse(addr).is_err(), "should reject {addr:?}");
        }
    }

    #[test]
    fn email_is_trimmed() {
        let parsed = EmailAddress::parse("  john@example.com ").expect("trimmed address");
        assert_eq!(parsed.as_str(), "john@example.com");
    }
}
