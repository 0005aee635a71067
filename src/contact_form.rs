//! State behind the contact form.
//!
//! The page owns one [`ContactForm`] in a signal. Every input event goes
//! through [`ContactForm::apply`], and the submit handler calls
//! [`ContactForm::submit`], which accepts the same values the browser's
//! `required` and `type="email"` checks accept.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("campo obrigatório vazio: {0}")]
    MissingField(Field),

    #[error("email inválido")]
    InvalidEmail,

    #[error("campo desconhecido: {0}")]
    UnknownField(String),
}

/// One of the form's inputs, identified by its `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Value of the input's `name` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Overwrite one field, leaving the others as they are.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Apply a change event coming from the input named `name`.
    pub fn apply(&mut self, name: &str, value: impl Into<String>) -> Result<Field> {
        let field = name.parse()?;
        self.set(field, value);
        Ok(field)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Accept the form: hand back what was entered and clear every field.
    ///
    /// On error nothing is cleared.
    pub fn submit(&mut self) -> Result<ContactForm> {
        self.validate()?;
        Ok(std::mem::take(self))
    }
}

/// The HTML "valid e-mail address" production, as enforced by
/// `<input type="email">`.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(is_local_char)
        && !domain.is_empty()
        && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply("name", "Ana").unwrap();
        form.apply("email", "ana@example.com").unwrap();
        form.apply("message", "Oi").unwrap();
        form
    }

    #[test]
    fn starts_empty() {
        let form = ContactForm::default();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn edits_touch_only_the_named_field() {
        let form = filled();
        assert_eq!(
            form,
            ContactForm {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "Oi".into(),
            }
        );
    }

    #[test]
    fn last_write_wins() {
        let mut form = ContactForm::default();
        for value in ["A", "An", "Ana", "Ana S", "Ana"] {
            form.apply("name", value).unwrap();
        }
        assert_eq!(form.name, "Ana");
        assert!(form.email.is_empty());
    }

    #[test]
    fn unknown_input_names_are_rejected() {
        let mut form = filled();
        let err = form.apply("phone", "123").unwrap_err();
        assert_eq!(err, FormError::UnknownField("phone".into()));
        assert_eq!(form, filled());
    }

    #[test]
    fn submit_returns_values_and_resets() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        assert_eq!(sent, filled());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn submit_with_empty_email_keeps_state() {
        let mut form = filled();
        form.set(Field::Email, "");
        let before = form.clone();

        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Email)));
        assert_eq!(form, before);
    }

    #[test]
    fn submit_reports_first_missing_field() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Name)));
    }

    #[test]
    fn submit_with_malformed_email_keeps_state() {
        let mut form = filled();
        form.set(Field::Email, "ana.example.com");
        assert_eq!(form.submit(), Err(FormError::InvalidEmail));
        assert_eq!(form.email, "ana.example.com");
    }

    #[test]
    fn email_shapes() {
        for ok in ["ana@example.com", "a@b", "first.last+tag@sub.example.com.br"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "ana", "@example.com", "ana@", "ana@-x.com", "ana@x..com", "a b@x.com", "a@b@c"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }
}
