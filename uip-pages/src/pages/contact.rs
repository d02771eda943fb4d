//! Contact page view model: the submission pipeline with timed
//! confirmation revert.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::warn;

use uip_core::constants::CONTACT_CONFIRMATION_SECS;
use uip_core::error::UipResult;
use uip_models::SubmissionType;
use uip_store::SiteBackend;

use crate::form::{ContactFields, ContactForm, Field, FormPhase};

/// View state of the contact page.
///
/// The `submission_type` is fixed for the life of the view by the upstream
/// `type` query parameter and is carried on every write. A successful
/// submission shows its confirmation for five seconds, then reverts to the
/// neutral phase through a cancellable scheduled task owned by this view.
pub struct ContactPage {
    submission_type: SubmissionType,
    form: Arc<Mutex<ContactForm>>,
    revert: StdMutex<Option<JoinHandle<()>>>,
}

impl ContactPage {
    pub fn new(submission_type: SubmissionType) -> Self {
        Self {
            submission_type,
            form: Arc::new(Mutex::new(ContactForm::new(submission_type))),
            revert: StdMutex::new(None),
        }
    }

    /// Build the page from the raw `type` query parameter.
    pub fn from_query(type_param: Option<&str>) -> Self {
        Self::new(SubmissionType::from_query(type_param))
    }

    pub fn submission_type(&self) -> SubmissionType {
        self.submission_type
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        self.form.lock().await.set_field(field, value);
    }

    pub async fn fields(&self) -> ContactFields {
        self.form.lock().await.fields().clone()
    }

    pub async fn phase(&self) -> FormPhase {
        self.form.lock().await.phase().clone()
    }

    /// Run one submit attempt through the pipeline.
    ///
    /// Validation failures return before any write is issued and leave the
    /// phase untouched. A successful write clears the fields, shows the
    /// confirmation, and schedules the timed revert; a failed write keeps
    /// the fields and moves to the error phase until the next attempt.
    pub async fn submit<B: SiteBackend>(&self, backend: &B) -> UipResult<()> {
        let submission = self.form.lock().await.begin_submit()?;

        let result = backend.submit_contact(&submission).await;

        let mut form = self.form.lock().await;
        match result {
            Ok(()) => {
                form.complete();
                drop(form);
                self.schedule_revert(Duration::from_secs(CONTACT_CONFIRMATION_SECS));
                Ok(())
            }
            Err(e) => {
                warn!("contact submission failed: {e}");
                form.fail();
                Err(e)
            }
        }
    }

    /// Arm the confirmation revert timer, replacing any armed one.
    fn schedule_revert(&self, delay: Duration) {
        let form = Arc::clone(&self.form);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            form.lock().await.acknowledge();
        });

        let mut slot = self.revert.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(old) = slot.replace(handle) {
            old.abort();
        }
    }

    /// Cancel the pending revert task, if any. Also invoked on drop.
    pub fn teardown(&self) {
        let mut slot = self.revert.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }

    // --- Copy variants keyed on the submission type ---

    pub fn headline(&self) -> &'static str {
        match self.submission_type {
            SubmissionType::Valuation => "Request IP Valuation",
            SubmissionType::Contact => "Get in Touch",
        }
    }

    pub fn intro(&self) -> &'static str {
        match self.submission_type {
            SubmissionType::Valuation => {
                "Get a free, no-obligation IP valuation from our expert team"
            }
            SubmissionType::Contact => {
                "Let's discuss how we can help you achieve your IP objectives"
            }
        }
    }

    pub fn form_title(&self) -> &'static str {
        match self.submission_type {
            SubmissionType::Valuation => "Valuation Request Form",
            SubmissionType::Contact => "Send us a Message",
        }
    }

    pub fn message_placeholder(&self) -> &'static str {
        match self.submission_type {
            SubmissionType::Valuation => "Please provide details about your IP portfolio...",
            SubmissionType::Contact => "How can we help you?",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.submission_type {
            SubmissionType::Valuation => "Request Valuation",
            SubmissionType::Contact => "Send Message",
        }
    }
}

impl Drop for ContactPage {
    fn drop(&mut self) {
        self.teardown();
    }
}
