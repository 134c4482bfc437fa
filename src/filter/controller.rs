use serde::Serialize;

use super::predicate::{matches, Filterable};

/// Why a filtered list came out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyState {
    /// The source list itself has no records.
    NoRecords,
    /// Records exist but none pass the current query/category.
    NoMatches,
}

/// Owns a fixed record list plus the query and category selection.
///
/// The visible list is never cached: [`ListController::filtered`] re-derives
/// it from the full source on each call, so it always reflects the latest
/// `set_query`/`set_category` and keeps source order.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    source: Vec<T>,
    query: String,
    selected_category: Option<String>,
}

impl<T: Filterable> ListController<T> {
    pub fn new(source: Vec<T>) -> Self {
        Self {
            source,
            query: String::new(),
            selected_category: None,
        }
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Chip click. Selecting the active category clears it, selecting
    /// another replaces it, `None` clears.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.selected_category = match (category, self.selected_category.as_deref()) {
            (None, _) => None,
            (Some(next), Some(current)) if next == current => None,
            (Some(next), _) => Some(next.to_string()),
        };
        tracing::debug!(category = ?self.selected_category, "List category changed");
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.selected_category = None;
    }

    /// Records passing the current filters, in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &T> + '_ {
        let query = self.query.as_str();
        let category = self.selected_category.as_deref();
        self.source
            .iter()
            .filter(move |record| matches(*record, query, category))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    /// `None` while at least one record is visible.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.source.is_empty() {
            Some(EmptyState::NoRecords)
        } else if self.filtered().next().is_none() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }
}
