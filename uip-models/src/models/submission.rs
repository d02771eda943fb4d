//! Contact submission entity model.
//!
//! Submissions are write-only: constructed by the form, sent once, never
//! read back. No identity is assigned client-side.

use serde::{Deserialize, Serialize};

/// Distinguishes a general inquiry from an IP-valuation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Contact,
    Valuation,
}

impl SubmissionType {
    /// Derive the submission type from the `type` query parameter on the
    /// contact page: the literal "valuation" selects a valuation request,
    /// anything else (including absence) a general inquiry.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("valuation") => SubmissionType::Valuation,
            _ => SubmissionType::Contact,
        }
    }

    /// Lowercase tag written to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::Contact => "contact",
            SubmissionType::Valuation => "valuation",
        }
    }
}

impl std::fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contact or valuation request as inserted into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
    pub submission_type: SubmissionType,
}
