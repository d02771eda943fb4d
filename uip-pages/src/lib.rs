//! Unique IP Solutions Pages - view-state machines for the site's pages.
//!
//! Each routed page owns its state exclusively; there is no cross-page
//! shared state. The building blocks are:
//! - Tagged fetch state for list-rendering pages (loading / ready / failed)
//! - The form submission pipeline with confirmation auto-revert
//! - The timer-driven testimonial rotator, cancelled on view teardown
//! - The pure client-side category filter over an already-loaded list
//!
//! Pages talk to the store through the `SiteBackend` trait so the machines
//! can be exercised without a network.

pub mod filter;
pub mod form;
pub mod pages;
pub mod rotator;
pub mod state;

// Re-export key types
pub use filter::FilterTag;
pub use form::{ContactForm, Field, FormPhase, NewsletterForm};
pub use pages::blog::BlogPage;
pub use pages::contact::ContactPage;
pub use pages::home::HomePage;
pub use pages::newsletter::NewsletterSignup;
pub use pages::portfolio::PortfolioPage;
pub use pages::services::{self, ServicesView};
pub use rotator::RotatingSelector;
pub use state::LoadState;
