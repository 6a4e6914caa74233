//! Form validation errors.
//!
//! The `Display` text of each variant is exactly what the alert dialog shows,
//! so screens can surface a failed check with `Effect::alert(err.to_string())`.

use thiserror::Error;

/// A form check that failed before the form's success action could run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are blank
    #[error("Please fill in all fields")]
    MissingFields,

    /// Login submitted without email or password
    #[error("Please enter your email and password")]
    MissingCredentials,

    /// Forgot-password submitted without an email
    #[error("Please enter your email address")]
    MissingEmail,

    /// Sign-up password and confirmation differ
    #[error("Passwords do not match!")]
    PasswordMismatch,

    /// Sign-up submitted without accepting the terms
    #[error("Please accept the terms and conditions")]
    TermsNotAccepted,

    /// Custom lesson saved without title or content
    #[error("Please fill in both title and content!")]
    MissingLessonFields,
}
