//! Contact form submission contract.
//!
//! The form collects a name, an email address and a message. Presence is
//! enforced by the browser through the `required` attributes; the submit
//! handler always cancels the default action and sends nothing anywhere.

use std::fmt;

use leptos::ev::SubmitEvent;
use thiserror::Error;
use tracing::info;

/// One of the three form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

/// Why a draft would not pass the browser's native constraints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),

    #[error("`{0}` is not an email address")]
    MalformedEmail(String),
}

/// Current contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Check the draft the way `required` and `type="email"` would.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::MalformedEmail(email.to_string())),
        }
    }
}

/// A submit event whose default action can be cancelled.
pub trait SubmitIntercept {
    fn cancel_default(&self);
}

impl SubmitIntercept for SubmitEvent {
    fn cancel_default(&self) {
        self.prevent_default();
    }
}

/// What happened to a submission. Nothing is ever sent.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A complete draft, dropped.
    Discarded,
    /// An incomplete draft, dropped.
    Rejected(ContactError),
}

/// Cancel the form's default action and drop the draft.
pub fn discard_submission<E: SubmitIntercept + ?Sized>(event: &E, draft: &ContactDraft) -> SubmitOutcome {
    event.cancel_default();

    match draft.validate() {
        Ok(()) => {
            info!("contact submission discarded (no delivery configured)");
            SubmitOutcome::Discarded
        }
        Err(err) => {
            info!(reason = %err, "incomplete contact submission discarded");
            SubmitOutcome::Rejected(err)
        }
    }
}
