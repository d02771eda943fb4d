//! Footer newsletter signup view model.
//!
//! The signup confirms locally (no store write) and reverts to neutral
//! after three seconds, mirroring the site footer.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use uip_core::constants::NEWSLETTER_CONFIRMATION_SECS;
use uip_core::error::UipResult;

use crate::form::{FormPhase, NewsletterForm};

/// View state of the footer newsletter form.
pub struct NewsletterSignup {
    form: Arc<Mutex<NewsletterForm>>,
    revert: StdMutex<Option<JoinHandle<()>>>,
}

impl Default for NewsletterSignup {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self {
            form: Arc::new(Mutex::new(NewsletterForm::new())),
            revert: StdMutex::new(None),
        }
    }

    pub async fn set_email(&self, value: impl Into<String>) {
        self.form.lock().await.set_email(value);
    }

    pub async fn email(&self) -> String {
        self.form.lock().await.email().to_string()
    }

    pub async fn phase(&self) -> FormPhase {
        self.form.lock().await.phase().clone()
    }

    /// Subscribe with the current email: validates, clears the field,
    /// shows the confirmation, and schedules the timed revert.
    pub async fn subscribe(&self) -> UipResult<()> {
        self.form.lock().await.subscribe()?;
        self.schedule_revert(Duration::from_secs(NEWSLETTER_CONFIRMATION_SECS));
        Ok(())
    }

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
}

impl Drop for NewsletterSignup {
    fn drop(&mut self) {
        self.teardown();
    }
}
