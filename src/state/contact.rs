//! Contact form draft and status line.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::{ContactError, ContactMessage};

/// What the status line under the form shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Hidden,
    Sending,
    Sent,
    Failed,
    /// Draft rejected before sending; carries the reason.
    Invalid(String),
}

impl FormStatus {
    /// Status text, or `None` when the line is hidden.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Sending => Some("Sending..."),
            Self::Sent => Some("Message sent successfully! \u{2713}"),
            Self::Failed => Some("Sending failed. Please try again."),
            Self::Invalid(reason) => Some(reason),
        }
    }

    /// CSS modifier class for the status line.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Hidden => "",
            Self::Sending => "loading",
            Self::Sent => "success",
            Self::Failed | Self::Invalid(_) => "error",
        }
    }

    /// Everything but the in-flight line disappears on its own.
    #[must_use]
    pub fn auto_hides(&self) -> bool {
        !matches!(self, Self::Hidden | Self::Sending)
    }
}

/// Form fields as typed plus the current status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: FormStatus,
    /// Bumped on every status change so stale auto-hide timers can tell
    /// they were superseded.
    pub status_seq: u64,
}

impl ContactState {
    /// Validate the current fields.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] for missing or malformed fields.
    pub fn draft(&self) -> Result<ContactMessage, ContactError> {
        ContactMessage::new(&self.name, &self.email, &self.phone, &self.message)
    }

    /// Set the status line and return its sequence number.
    pub fn set_status(&mut self, status: FormStatus) -> u64 {
        self.status = status;
        self.status_seq += 1;
        self.status_seq
    }

    /// Hide the status line unless a newer status replaced it.
    pub fn hide_if_current(&mut self, seq: u64) {
        if self.status_seq == seq && self.status.auto_hides() {
            self.status = FormStatus::Hidden;
        }
    }

    /// Clear all fields after a successful send.
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }

    /// Record the outcome of a send; success also clears the form.
    pub fn finish(&mut self, delivered: bool) -> u64 {
        if delivered {
            self.reset_fields();
            self.set_status(FormStatus::Sent)
        } else {
            self.set_status(FormStatus::Failed)
        }
    }
}
