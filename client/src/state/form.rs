//! Submission state shared by the sign-in and registration forms.
//!
//! DESIGN
//! ======
//! While a request is pending the form refuses another submission, so one
//! form never has two auth requests in flight.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::auth::AuthError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pending: bool,
    error: Option<&'static str>,
}

impl SubmitState {
    /// Start a submission. Returns `false` (and changes nothing) if one is
    /// already pending.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Reject before dispatch, e.g. on a validation message.
    pub fn reject(&mut self, message: &'static str) {
        self.pending = false;
        self.error = Some(message);
    }

    pub fn fail(&mut self, err: &AuthError) {
        self.reject(err.user_message());
    }

    pub fn succeed(&mut self) {
        self.pending = false;
        self.error = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}
