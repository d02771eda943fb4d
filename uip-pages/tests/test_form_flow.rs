//! Integration tests for the submission pipeline, including the timed
//! confirmation reverts under simulated time.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::FakeBackend;
use uip_models::SubmissionType;
use uip_pages::{ContactPage, Field, FormPhase, NewsletterSignup};

async fn settle() {
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
}

async fn fill(page: &ContactPage) {
    page.set_field(Field::Name, "John Doe").await;
    page.set_field(Field::Email, "john@company.com").await;
    page.set_field(Field::Message, "How can you help with our patents?").await;
}

#[tokio::test(start_paused = true)]
async fn contact_success_reverts_after_five_seconds() {
    let backend = FakeBackend::new();
    let page = ContactPage::new(SubmissionType::Contact);
    fill(&page).await;

    page.submit(&backend).await.unwrap();

    // Success clears every field and shows the confirmation.
    assert_eq!(page.phase().await, FormPhase::Submitted);
    let fields = page.fields().await;
    assert!(fields.name.is_empty());
    assert!(fields.email.is_empty());
    assert!(fields.message.is_empty());

    // Still confirming just before the deadline...
    tokio::time::advance(Duration::from_millis(4_999)).await;
    settle().await;
    assert_eq!(page.phase().await, FormPhase::Submitted);

    // ...and neutral again once five seconds have elapsed.
    tokio::time::advance(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(page.phase().await, FormPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn contact_failure_keeps_fields_until_resubmit() {
    let backend = FakeBackend::new().failing_writes();
    let page = ContactPage::new(SubmissionType::Contact);
    fill(&page).await;

    let err = page.submit(&backend).await.unwrap_err();
    assert!(err.is_remote());

    match page.phase().await {
        FormPhase::Error(message) => {
            assert_eq!(
                message,
                "Failed to submit form. Please try again or contact us directly."
            );
        }
        other => panic!("expected error phase, got {other:?}"),
    }

    // The user loses no typed work.
    let fields = page.fields().await;
    assert_eq!(fields.name, "John Doe");
    assert_eq!(fields.message, "How can you help with our patents?");

    // The error phase holds; no timed revert applies to it.
    tokio::time::advance(Duration::from_secs(10)).await;
    settle().await;
    assert!(matches!(page.phase().await, FormPhase::Error(_)));
}

#[tokio::test]
async fn validation_failure_never_issues_a_write() {
    let backend = FakeBackend::new();
    let page = ContactPage::new(SubmissionType::Contact);
    page.set_field(Field::Name, "John Doe").await;
    page.set_field(Field::Email, "john@company.com").await;
    // message left empty

    let err = page.submit(&backend).await.unwrap_err();
    assert!(!err.is_remote());
    assert_eq!(page.phase().await, FormPhase::Idle);
    assert!(backend.recorded_submissions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn submitting_phase_is_observable_while_write_in_flight() {
    let (backend, gate) = FakeBackend::new().gated_writes();
    let backend = Arc::new(backend);
    let page = Arc::new(ContactPage::new(SubmissionType::Contact));
    fill(&page).await;

    let task = {
        let page = Arc::clone(&page);
        let backend = Arc::clone(&backend);
        tokio::spawn(async move { page.submit(&*backend).await })
    };

    settle().await;
    assert_eq!(page.phase().await, FormPhase::Submitting);

    gate.add_permits(1);
    task.await.unwrap().unwrap();
    assert_eq!(page.phase().await, FormPhase::Submitted);
}

#[tokio::test]
async fn valuation_query_parameter_tags_the_write() {
    let backend = FakeBackend::new();
    let page = ContactPage::from_query(Some("valuation"));
    assert_eq!(page.submission_type(), SubmissionType::Valuation);
    assert_eq!(page.headline(), "Request IP Valuation");
    assert_eq!(page.submit_label(), "Request Valuation");

    fill(&page).await;
    page.submit(&backend).await.unwrap();

    let recorded = backend.recorded_submissions();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].submission_type, SubmissionType::Valuation);
    page.teardown();
}

#[tokio::test]
async fn absent_or_unknown_query_parameter_means_contact() {
    assert_eq!(
        ContactPage::from_query(None).submission_type(),
        SubmissionType::Contact
    );
    assert_eq!(
        ContactPage::from_query(Some("pricing")).submission_type(),
        SubmissionType::Contact
    );
    let page = ContactPage::from_query(None);
    assert_eq!(page.headline(), "Get in Touch");
    assert_eq!(page.form_title(), "Send us a Message");
}

#[tokio::test(start_paused = true)]
async fn newsletter_reverts_after_three_seconds() {
    let signup = NewsletterSignup::new();
    signup.set_email("reader@example.com").await;

    signup.subscribe().await.unwrap();
    assert_eq!(signup.phase().await, FormPhase::Submitted);
    assert!(signup.email().await.is_empty());

    tokio::time::advance(Duration::from_millis(2_999)).await;
    settle().await;
    assert_eq!(signup.phase().await, FormPhase::Submitted);

    tokio::time::advance(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(signup.phase().await, FormPhase::Idle);
}

#[tokio::test]
async fn newsletter_requires_plausible_email() {
    let signup = NewsletterSignup::new();
    signup.set_email("not-an-email").await;
    assert!(signup.subscribe().await.is_err());
    assert_eq!(signup.phase().await, FormPhase::Idle);
    // The rejected input stays in the field.
    assert_eq!(signup.email().await, "not-an-email");
}
