//! Client-side category filter over an already-loaded portfolio list.
//!
//! The source list is the single source of truth; the visible view is a
//! pure recomputation of (source, tag) and never mutates the source.

use uip_models::{PortfolioCategory, PortfolioItem};

/// Active filter selection. `All` is the sentinel meaning "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterTag {
    #[default]
    All,
    Category(PortfolioCategory),
}

impl FilterTag {
    /// Filter bar entries in display order.
    pub fn all_tags() -> Vec<FilterTag> {
        let mut tags = vec![FilterTag::All];
        tags.extend(PortfolioCategory::ALL.iter().map(|c| FilterTag::Category(*c)));
        tags
    }

    /// Button label for the filter bar.
    pub fn label(&self) -> String {
        match self {
            FilterTag::All => "All Cases".to_string(),
            FilterTag::Category(c) => c.label().to_string(),
        }
    }

    /// Whether an item passes this filter.
    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Category(c) => item.category == *c,
        }
    }

    /// The "no results" copy for this tag: generic for the sentinel,
    /// category-specific otherwise.
    pub fn empty_message(&self) -> String {
        match self {
            FilterTag::All => "Portfolio items will appear here once they are added.".to_string(),
            FilterTag::Category(c) => {
                format!("No {c} cases available at this time.")
            }
        }
    }
}

/// Recompute the visible view: either the full list (sentinel tag) or
/// exactly the subset whose category equals the tag, preserving the
/// original relative order.
pub fn apply(items: &[PortfolioItem], tag: FilterTag) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| tag.matches(item)).collect()
}
