//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "Unique IP Solutions";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST path prefix of the managed store.
pub const REST_PATH: &str = "rest/v1";

/// Default store request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Interval between automatic testimonial rotations, in milliseconds.
pub const TESTIMONIAL_ROTATION_MS: u64 = 5_000;

/// How long the contact form shows its confirmation before reverting, in seconds.
pub const CONTACT_CONFIRMATION_SECS: u64 = 5;

/// How long the newsletter form shows its confirmation before reverting, in seconds.
pub const NEWSLETTER_CONFIRMATION_SECS: u64 = 3;

/// Row limit for the home page featured portfolio section.
pub const FEATURED_PORTFOLIO_LIMIT: u32 = 6;

/// Collection (table) names in the managed store.
pub mod tables {
    pub const PORTFOLIO_ITEMS: &str = "portfolio_items";
    pub const BLOG_POSTS: &str = "blog_posts";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT_SUBMISSIONS: &str = "contact_submissions";
}

/// Environment variable names for store credentials. These override the
/// values in the config file when set.
pub mod env {
    pub const STORE_URL: &str = "UIP_STORE_URL";
    pub const STORE_KEY: &str = "UIP_STORE_KEY";
}

/// Site contact details shown on the contact page and in the footer.
pub mod contact {
    pub const EMAIL: &str = "info@uniqueipsolutions.com";
    pub const PHONE: &str = "+1 (234) 567-890";
    pub const LOCATION: &str = "Global Offices Worldwide";
}
