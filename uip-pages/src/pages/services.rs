//! Services page resolution over the static catalog.

use uip_models::ServiceOffering;

/// What the services route renders for a given path.
pub enum ServicesView {
    /// `/services` - the index of all offerings.
    Index(&'static [ServiceOffering]),
    /// `/services/:service` with a known slug.
    Detail(&'static ServiceOffering),
    /// `/services/:service` with an unknown slug.
    NotFound(String),
}

/// Resolve the optional `:service` path segment.
pub fn resolve(slug: Option<&str>) -> ServicesView {
    match slug {
        None => ServicesView::Index(ServiceOffering::all()),
        Some(slug) => match ServiceOffering::find(slug) {
            Some(offering) => ServicesView::Detail(offering),
            None => ServicesView::NotFound(slug.to_string()),
        },
    }
}
