//! Contact — a message left through the website's contact form.

use serde::{Deserialize, Serialize};

use crate::error::{EateryError, ValidationError};
use crate::id::ContactId;
use crate::time::{Timestamp, now};

/// An inbound contact message. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

impl Contact {
    /// Create a contact message stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when both name parts are blank.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, EateryError> {
        let contact = Self {
            id: ContactId::new(),
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            email: email.into(),
            message: message.into(),
            created_at: now(),
        };
        if contact.full_name().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(contact)
    }

    /// Create a contact from a single free-form name, split on the first
    /// whitespace into first and last name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn from_full_name(
        name: &str,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, EateryError> {
        let (first, last) = split_name(name);
        Self::new(first, last, email, message)
    }

    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}

fn split_name(name: &str) -> (&str, &str) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((first, last)) => (first, last.trim()),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_contact_with_both_names() {
        let contact = Contact::new("Ann", "Lee", "ann@example.com", "hello").unwrap();
        assert_eq!(contact.full_name(), "Ann Lee");
    }

    #[test]
    fn should_split_full_name_on_first_whitespace() {
        let contact =
            Contact::from_full_name("  Mary Ann Smith ", "m@example.com", "hi").unwrap();
        assert_eq!(contact.first_name, "Mary");
        assert_eq!(contact.last_name, "Ann Smith");
    }

    #[test]
    fn should_accept_single_word_name() {
        let contact = Contact::from_full_name("Cher", "c@example.com", "hi").unwrap();
        assert_eq!(contact.first_name, "Cher");
        assert_eq!(contact.last_name, "");
        assert_eq!(contact.full_name(), "Cher");
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Contact::new(" ", "", "x@example.com", "hi");
        assert!(matches!(
            result,
            Err(EateryError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_serialize_names_in_camel_case() {
        let contact = Contact::new("Ann", "Lee", "ann@example.com", "hello").unwrap();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["lastName"], "Lee");
    }
}
