//! Blog post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published article in the insights blog.
///
/// Only `published = true` rows are ever fetched; they arrive ordered by
/// `published_at` descending. The slug is used as an in-page anchor target,
/// not a real route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Full article body. Unused by the list view but part of the row shape.
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub author: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// The date shown next to the post: publish time, falling back to
    /// creation time when the publish timestamp is absent.
    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Display date formatted as "March 5, 2024".
    pub fn date_label(&self) -> String {
        let d = self.display_date();
        // %B gives the full month name; day without zero padding.
        format!("{} {}, {}", d.format("%B"), d.format("%-d"), d.format("%Y"))
    }
}
