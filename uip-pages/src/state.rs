//! Tagged fetch state for list-rendering pages.
//!
//! Pages never infer their state from list emptiness: "still loading",
//! "loaded but empty", and "failed" are distinct states with distinct
//! affordances.

use tracing::warn;

use uip_core::error::UipResult;

/// Fetch lifecycle of a page's list section.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// The one read is outstanding; render a loading indicator.
    Loading,
    /// The read completed; rows are stored verbatim in response order,
    /// possibly empty.
    Ready(Vec<T>),
    /// The read failed; carries a user-facing reason.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Fold a fetch result into the state, logging failures.
    pub fn from_result(result: UipResult<Vec<T>>) -> Self {
        match result {
            Ok(rows) => LoadState::Ready(rows),
            Err(e) => {
                warn!("list fetch failed: {e}");
                LoadState::Failed(e.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// The loaded rows; empty unless the state is `Ready`.
    pub fn rows(&self) -> &[T] {
        match self {
            LoadState::Ready(rows) => rows,
            _ => &[],
        }
    }

    /// Whether the read completed with zero rows ("no data yet", distinct
    /// from `Loading` and from `Failed`).
    pub fn is_empty_ready(&self) -> bool {
        matches!(self, LoadState::Ready(rows) if rows.is_empty())
    }

    /// The failure reason, when failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
