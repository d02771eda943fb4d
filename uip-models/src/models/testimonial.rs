//! Client testimonial entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client quote shown in the home page carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub company: String,
    pub position: Option<String>,
    pub testimonial_text: String,
    /// Star rating, nominally 1-5.
    pub rating: i32,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    /// Number of stars to render, clamped to [0, 5].
    pub fn star_count(&self) -> u32 {
        self.rating.clamp(0, 5) as u32
    }

    /// Attribution line: "Position, Company" or just "Company".
    pub fn attribution(&self) -> String {
        match &self.position {
            Some(position) => format!("{position}, {}", self.company),
            None => self.company.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn testimonial(position: Option<&str>, rating: i32) -> Testimonial {
        Testimonial {
            id: "t1".into(),
            client_name: "Dana Whitfield".into(),
            company: "Northgate Robotics".into(),
            position: position.map(String::from),
            testimonial_text: "The valuation was fast and the sale exceeded our target.".into(),
            rating,
            featured: true,
            display_order: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_star_count_clamped() {
        assert_eq!(testimonial(None, 5).star_count(), 5);
        assert_eq!(testimonial(None, 9).star_count(), 5);
        assert_eq!(testimonial(None, -1).star_count(), 0);
    }

    #[test]
    fn test_attribution() {
        assert_eq!(
            testimonial(Some("CTO"), 5).attribution(),
            "CTO, Northgate Robotics"
        );
        assert_eq!(testimonial(None, 5).attribution(), "Northgate Robotics");
    }
}
