use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Subject is required")]
    SubjectRequired,

    #[error("Message is required")]
    MessageRequired,
}

impl ContactError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired => "name",
            Self::EmailRequired | Self::InvalidEmail => "email",
            Self::SubjectRequired => "subject",
            Self::MessageRequired => "message",
        }
    }
}

impl ContactForm {
    /// Collects every failing field, in form order
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ContactError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.push(ContactError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            errors.push(ContactError::SubjectRequired);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactError::MessageRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha Rao".into(),
            email: "asha@hospital.in".into(),
            subject: "Budget report".into(),
            message: "Please share the Q4 numbers.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactError::NameRequired,
                ContactError::EmailRequired,
                ContactError::SubjectRequired,
                ContactError::MessageRequired,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.subject = "   ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![ContactError::SubjectRequired]);
        assert_eq!(errors[0].field(), "subject");
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "asha.hospital.in".into();
        assert_eq!(form.validate().unwrap_err(), vec![ContactError::InvalidEmail]);
        assert_eq!(ContactError::InvalidEmail.to_string(), "Invalid email format");
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }
}
