//! Portfolio item entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Transaction category of a portfolio item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioCategory {
    Sold,
    Licensed,
    Leased,
}

impl PortfolioCategory {
    /// All categories, in the order they appear in the filter bar.
    pub const ALL: &'static [PortfolioCategory] = &[
        PortfolioCategory::Sold,
        PortfolioCategory::Licensed,
        PortfolioCategory::Leased,
    ];

    /// Lowercase tag used in the store and in filter arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::Sold => "sold",
            PortfolioCategory::Licensed => "licensed",
            PortfolioCategory::Leased => "leased",
        }
    }

    /// Capitalized label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::Sold => "Sold",
            PortfolioCategory::Licensed => "Licensed",
            PortfolioCategory::Leased => "Leased",
        }
    }
}

impl std::fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PortfolioCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sold" => Ok(PortfolioCategory::Sold),
            "licensed" => Ok(PortfolioCategory::Licensed),
            "leased" => Ok(PortfolioCategory::Leased),
            other => Err(format!("unknown portfolio category: {other}")),
        }
    }
}

/// A completed IP transaction showcased in the portfolio.
///
/// Read-only from the client's perspective; rows arrive ordered by
/// `display_order` and are never re-sorted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    pub image_url: Option<String>,
    /// Display string for the deal value (e.g. "$2.4M"), not a number.
    pub deal_value: Option<String>,
    pub client_name: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl PortfolioItem {
    /// Completion date formatted as "Mar 2024", or None when absent.
    pub fn completion_label(&self) -> Option<String> {
        self.completion_date.map(|d| d.format("%b %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "11111111-2222-3333-4444-555555555555",
            "title": "Semiconductor Patent Portfolio",
            "description": "Sale of a 40-patent portfolio.",
            "category": "sold",
            "image_url": null,
            "deal_value": "$12.5M",
            "client_name": "Acme Semiconductors",
            "completion_date": "2024-03-15",
            "featured": true,
            "display_order": 1,
            "created_at": "2024-04-01T09:00:00Z"
        }"#
    }

    #[test]
    fn test_deserialize_row() {
        let item: PortfolioItem = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.category, PortfolioCategory::Sold);
        assert_eq!(item.deal_value.as_deref(), Some("$12.5M"));
        assert!(item.featured);
    }

    #[test]
    fn test_completion_label() {
        let item: PortfolioItem = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(item.completion_label().as_deref(), Some("Mar 2024"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Licensed".parse::<PortfolioCategory>().unwrap(), PortfolioCategory::Licensed);
        assert!("rented".parse::<PortfolioCategory>().is_err());
    }

    #[test]
    fn test_category_serde_tag() {
        let tag = serde_json::to_string(&PortfolioCategory::Leased).unwrap();
        assert_eq!(tag, "\"leased\"");
    }
}
