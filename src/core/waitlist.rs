//! Waitlist submission draft
//!
//! The only stateful entity on the site. The draft lives transiently in
//! the browser: it is mutated on every keystroke, resolved by an explicit
//! submit transition, and never persisted or sent anywhere.

use serde::{Deserialize, Serialize};

use super::email::validate_email;

/// Copy shown after a submit attempt passes validation
pub const WAITLIST_SUCCESS_MESSAGE: &str = "Thank you! You have been added to the waitlist.";

/// Copy shown after a submit attempt fails validation
pub const WAITLIST_ERROR_MESSAGE: &str = "Please enter a valid email address.";

/// Outcome of a submit transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

/// In-memory waitlist submission draft
///
/// Two-step state machine: editing -> validating -> accepted | rejected.
/// Both terminal states return to editing on the next keystroke; the
/// message persists until the next submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistDraft {
    /// Typed email value, cleared on successful submission
    pub email: String,
    /// Message shown to the user, set after a submit attempt
    pub message: Option<String>,
    /// True only while the latest submit attempt passed validation
    pub submitted: bool,
}

impl WaitlistDraft {
    /// Empty draft in the editing state
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke transition: updates the typed value and returns to the
    /// editing state. The message from the previous submit is kept.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Submit transition: validates the typed value and resolves to
    /// accepted or rejected.
    ///
    /// Accepted sets the success message, marks the draft submitted and
    /// clears the typed value. Rejected sets the error message, resets
    /// the submitted flag and retains the typed value. Idempotent per
    /// call; no I/O is attempted.
    pub fn submit(&mut self) -> SubmitOutcome {
        match validate_email(&self.email) {
            Ok(()) => {
                self.submitted = true;
                self.message = Some(WAITLIST_SUCCESS_MESSAGE.to_string());
                self.email.clear();
                SubmitOutcome::Accepted
            }
            Err(_) => {
                self.submitted = false;
                self.message = Some(WAITLIST_ERROR_MESSAGE.to_string());
                SubmitOutcome::Rejected
            }
        }
    }
}
