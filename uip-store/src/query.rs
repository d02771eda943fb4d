//! Read query builder for the store's REST dialect.

use std::fmt::Display;

/// Sort direction for an ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    fn suffix(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// A select over one collection: optional equality filters, an ordering
/// clause, and an optional row limit.
///
/// Renders to the store's query-string encoding, e.g.
/// `portfolio_items?select=*&featured=eq.true&order=display_order.asc&limit=6`.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, OrderDirection)>,
    limit: Option<u32>,
}

impl SelectQuery {
    /// Start a select over the given collection. All columns are returned.
    pub fn from(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Add an equality filter on a column.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    /// Set the ordering clause. The store does the sorting; rows are never
    /// re-sorted client-side.
    pub fn order(mut self, column: &str, direction: OrderDirection) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// The collection this query reads.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Render the request path and query string, relative to the REST root.
    pub fn to_path(&self) -> String {
        let mut path = format!("{}?select=*", self.table);
        for (column, value) in &self.filters {
            path.push_str(&format!("&{column}=eq.{value}"));
        }
        if let Some((column, direction)) = &self.order {
            path.push_str(&format!("&order={column}.{}", direction.suffix()));
        }
        if let Some(n) = self.limit {
            path.push_str(&format!("&limit={n}"));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_select() {
        let q = SelectQuery::from("testimonials");
        assert_eq!(q.to_path(), "testimonials?select=*");
    }

    #[test]
    fn test_full_query() {
        let q = SelectQuery::from("portfolio_items")
            .eq("featured", true)
            .order("display_order", OrderDirection::Asc)
            .limit(6);
        assert_eq!(
            q.to_path(),
            "portfolio_items?select=*&featured=eq.true&order=display_order.asc&limit=6"
        );
    }

    #[test]
    fn test_descending_order() {
        let q = SelectQuery::from("blog_posts")
            .eq("published", true)
            .order("published_at", OrderDirection::Desc);
        assert_eq!(
            q.to_path(),
            "blog_posts?select=*&published=eq.true&order=published_at.desc"
        );
    }

    #[test]
    fn test_multiple_filters_keep_insertion_order() {
        let q = SelectQuery::from("t").eq("a", 1).eq("b", "x");
        assert_eq!(q.to_path(), "t?select=*&a=eq.1&b=eq.x");
    }
}
