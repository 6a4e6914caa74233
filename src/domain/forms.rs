//! Form checks shared by the sign-in, sign-up, contact and lesson screens.
//!
//! Each check returns the first failing [`ValidationError`]; the order of
//! checks is part of the behaviour (sign-up reports missing fields before a
//! password mismatch, and a mismatch before the terms box).

use crate::error::ValidationError;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Sign-in: both fields required.
pub fn check_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if blank(email) || blank(password) {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Sign-up field values.
#[derive(Debug, Clone, Copy)]
pub struct SignupFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm: &'a str,
    pub accepted_terms: bool,
}

/// Sign-up: required fields, then matching passwords, then terms.
pub fn check_signup(fields: &SignupFields<'_>) -> Result<(), ValidationError> {
    if [fields.name, fields.email, fields.password, fields.confirm]
        .iter()
        .any(|v| blank(v))
    {
        return Err(ValidationError::MissingFields);
    }
    if fields.password != fields.confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if !fields.accepted_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

/// Contact form: every field required.
pub fn check_contact(fields: [&str; 4]) -> Result<(), ValidationError> {
    if fields.iter().any(|v| blank(v)) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Password reset: an email is required.
pub fn check_reset_email(email: &str) -> Result<(), ValidationError> {
    if blank(email) {
        return Err(ValidationError::MissingEmail);
    }
    Ok(())
}

/// Custom lesson: title and content required.
pub fn check_lesson(title: &str, content: &str) -> Result<(), ValidationError> {
    if blank(title) || blank(content) {
        return Err(ValidationError::MissingLessonFields);
    }
    Ok(())
}

/// Password strength meter shown on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Measure by length; an empty password shows no meter.
    pub fn measure(password: &str) -> Option<Self> {
        match password.chars().count() {
            0 => None,
            1..=5 => Some(PasswordStrength::Weak),
            6..=9 => Some(PasswordStrength::Good),
            _ => Some(PasswordStrength::Strong),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Filled segments out of three.
    pub fn segments(&self) -> usize {
        match self {
            PasswordStrength::Weak => 1,
            PasswordStrength::Good => 2,
            PasswordStrength::Strong => 3,
        }
    }
}
