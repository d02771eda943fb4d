//! Form submission state machines.
//!
//! A form is a mapping of named text fields plus a phase. Each keystroke
//! updates exactly one field. Submission runs `Idle/Error -> Submitting ->
//! Submitted | Error`; required-field validation happens before any write is
//! issued, and a failed write retains the typed fields so nothing is lost on
//! resubmit. The owning page drives the asynchronous parts (the store write
//! and the timed confirmation revert).

use lazy_static::lazy_static;
use regex::Regex;

use uip_core::error::{UipError, UipResult};
use uip_models::{ContactSubmission, SubmissionType};

lazy_static! {
    /// Loose email shape check: something@something.tld, no whitespace.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// User-facing banner text for a failed submission.
pub const SUBMIT_ERROR_MESSAGE: &str =
    "Failed to submit form. Please try again or contact us directly.";

/// Confirmation banner for a successful contact/valuation submission.
pub const SUBMIT_CONFIRMATION_MESSAGE: &str =
    "Thank you for contacting us! We'll get back to you within 24 hours.";

/// Confirmation text for a newsletter signup.
pub const SUBSCRIBE_CONFIRMATION_MESSAGE: &str = "Thank you for subscribing!";

/// The named text fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

/// Field values of the contact form, all initialized empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    /// Update exactly the one changed field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = ContactFields::default();
    }

    /// Build the store row: empty company becomes an absent column.
    pub fn to_submission(&self, submission_type: SubmissionType) -> ContactSubmission {
        let company = self.company.trim();
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: self.message.trim().to_string(),
            submission_type,
        }
    }
}

/// Lifecycle phase of a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Neutral: accepting input.
    #[default]
    Idle,
    /// The write is in flight; the submit control is disabled.
    Submitting,
    /// The write succeeded; a confirmation is shown until the timed revert.
    Submitted,
    /// The write failed; carries the user-facing banner text. Fields are
    /// retained and the phase holds until the next submit attempt.
    Error(String),
}

/// State machine for the contact/valuation form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    submission_type: SubmissionType,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new(submission_type: SubmissionType) -> Self {
        Self {
            fields: ContactFields::default(),
            submission_type,
            phase: FormPhase::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn submission_type(&self) -> SubmissionType {
        self.submission_type
    }

    /// Update one field. Input is accepted in every phase; typing over a
    /// confirmation or an error banner is allowed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Required-field validation: name, email, and message must be
    /// non-empty and the email must look like an address. Company is
    /// optional.
    pub fn validate(&self) -> UipResult<()> {
        if self.fields.name.trim().is_empty() {
            return Err(UipError::Validation("name is required".into()));
        }
        let email = self.fields.email.trim();
        if email.is_empty() {
            return Err(UipError::Validation("email is required".into()));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(UipError::Validation(format!(
                "\"{email}\" is not a valid email address"
            )));
        }
        if self.fields.message.trim().is_empty() {
            return Err(UipError::Validation("message is required".into()));
        }
        Ok(())
    }

    /// Begin a submit attempt.
    ///
    /// Validation failure leaves the phase untouched and no write is ever
    /// issued. On success the phase moves to `Submitting` and the row to
    /// insert is returned.
    pub fn begin_submit(&mut self) -> UipResult<ContactSubmission> {
        self.validate()?;
        self.phase = FormPhase::Submitting;
        Ok(self.fields.to_submission(self.submission_type))
    }

    /// Record a successful write: all fields are cleared and the
    /// confirmation phase begins.
    pub fn complete(&mut self) {
        self.fields.clear();
        self.phase = FormPhase::Submitted;
    }

    /// Record a failed write: fields are retained for resubmission.
    pub fn fail(&mut self) {
        self.phase = FormPhase::Error(SUBMIT_ERROR_MESSAGE.to_string());
    }

    /// Timed revert from the confirmation back to neutral. A no-op in any
    /// other phase.
    pub fn acknowledge(&mut self) {
        if self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Idle;
        }
    }
}

/// State machine for the footer newsletter form.
///
/// A single email field; confirmation is local only (no store write) and
/// reverts after a shorter delay than the contact form.
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    email: String,
    phase: FormPhase,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Subscribe with the current email. On success the field is cleared
    /// and the confirmation phase begins.
    pub fn subscribe(&mut self) -> UipResult<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UipError::Validation("email is required".into()));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(UipError::Validation(format!(
                "\"{email}\" is not a valid email address"
            )));
        }
        self.email.clear();
        self.phase = FormPhase::Submitted;
        Ok(())
    }

    /// Timed revert from the confirmation back to neutral.
    pub fn acknowledge(&mut self) {
        if self.phase == FormPhase::Submitted {
            self.phase = FormPhase::Idle;
        }
    }
}
