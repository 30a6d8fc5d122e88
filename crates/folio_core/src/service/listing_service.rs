//! Listing state holder for blog and project pages.
//!
//! # Responsibility
//! - Own the page catalog and the current filter/sort state.
//! - Recompute the derived list whenever results are requested.
//! - Report search usage as structured log events.
//!
//! # Invariants
//! - The catalog is never mutated; only `FilterState` changes.
//! - The last state update wins; nothing is cached between calls.

use crate::filter::engine::filter_and_sort;
use crate::filter::state::{DateRange, FilterState, RangeFilter, Selection, Sort, TagMatch};
use crate::model::catalog::Catalog;
use crate::model::item::{ContentItem, Difficulty, ParseFacetError, ProjectStatus};
use log::info;

/// Derived list plus the size of the listing it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingResult<'a> {
    pub items: Vec<&'a ContentItem>,
    pub total: usize,
}

impl ListingResult<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page should render its "nothing found" state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Listing facade over one catalog.
pub struct ListingService {
    catalog: Catalog,
    state: FilterState,
}

impl ListingService {
    /// Creates a service with the default (unfiltered, unsorted) state.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    pub fn with_state(catalog: Catalog, state: FilterState) -> Self {
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn replace_state(&mut self, state: FilterState) {
        self.state = state;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Selects a category; `All` clears the category filter.
    pub fn select_category(&mut self, category: &str) {
        self.state.category = Selection::label(category);
    }

    pub fn select_industry(&mut self, industry: &str) {
        self.state.industry = Selection::label(industry);
    }

    /// Selects a status by label; `all` clears the status filter.
    ///
    /// # Errors
    /// - Unknown status label; state is left unchanged.
    pub fn select_status(&mut self, status: &str) -> Result<(), ParseFacetError> {
        self.state.status = Selection::<ProjectStatus>::parse(status)?;
        Ok(())
    }

    /// Selects a difficulty by label; `all` clears the difficulty filter.
    ///
    /// # Errors
    /// - Unknown difficulty label; state is left unchanged.
    pub fn select_difficulty(&mut self, difficulty: &str) -> Result<(), ParseFacetError> {
        self.state.difficulty = Selection::<Difficulty>::parse(difficulty)?;
        Ok(())
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
    }

    pub fn set_tag_match(&mut self, tag_match: TagMatch) {
        self.state.tag_match = tag_match;
    }

    pub fn set_featured_only(&mut self, featured_only: bool) {
        self.state.featured_only = featured_only;
    }

    pub fn set_team_size(&mut self, team_size: RangeFilter<u32>) {
        self.state.team_size = team_size;
    }

    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.state.date_range = date_range;
    }

    pub fn set_sort(&mut self, sort: Option<Sort>) {
        self.state.sort = sort;
    }

    /// Resets every filter and the sort.
    pub fn clear_filters(&mut self) {
        self.state.clear();
        info!("event=listing_filters_cleared module=service status=ok");
    }

    /// Evaluates the current state against the catalog.
    ///
    /// # Side effects
    /// - Emits `listing_search` with query length and result count when a
    ///   query is active. The query text itself is never logged.
    pub fn results(&self) -> ListingResult<'_> {
        let items = filter_and_sort(self.catalog.items(), &self.state);
        let query = self.state.query.trim();
        if !query.is_empty() {
            info!(
                "event=listing_search module=service status=ok query_chars={} results={} total={}",
                query.chars().count(),
                items.len(),
                self.catalog.len()
            );
        }
        ListingResult {
            items,
            total: self.catalog.len(),
        }
    }
}
