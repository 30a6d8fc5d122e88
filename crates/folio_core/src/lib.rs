//! Core logic for the folio portfolio site.
//! This crate is the single source of truth for listing content and how it
//! is searched, filtered and ordered.

pub mod content;
pub mod db;
pub mod filter;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod service;

pub use content::dates::{format_display_date, parse_content_date};
pub use content::excerpt::derive_excerpt;
pub use content::read_time::{calculate_read_time, ReadTime, DEFAULT_WORDS_PER_MINUTE};
pub use filter::engine::{filter_and_sort, matches};
pub use filter::state::{
    DateRange, FilterState, RangeFilter, Selection, Sort, SortDirection, SortKey, TagMatch,
    ALL_OPTION,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::{Catalog, CatalogError, FacetOptions};
pub use model::item::{
    ContentItem, Difficulty, ItemId, ItemKind, ItemValidationError, ParseFacetError, Performance,
    ProjectStatus,
};
pub use prefs::store::{PreferenceStore, PrefsError, PrefsResult, SqlitePreferenceStore};
pub use prefs::theme::Theme;
pub use service::listing_service::{ListingResult, ListingService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
