//! Unique IP Solutions Models - Entity shapes and static site content.
//!
//! All list entities are rows in the externally-owned store; this crate only
//! defines their shape as consumed (portfolio items, blog posts,
//! testimonials) or produced (contact submissions). It also carries the
//! static service catalog that backs the services pages.

pub mod catalog;
pub mod models;

// Re-export key types
pub use catalog::{ServiceKind, ServiceOffering, ProcessStep};
pub use models::blog::BlogPost;
pub use models::portfolio::{PortfolioCategory, PortfolioItem};
pub use models::submission::{ContactSubmission, SubmissionType};
pub use models::testimonial::Testimonial;
