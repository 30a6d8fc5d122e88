//! Filter and sort state driven by listing controls.
//!
//! # Invariants
//! - The default state filters nothing and applies no sort.
//! - `Selection::Any` bypasses its facet entirely, including for items that
//!   do not carry that facet.

use crate::model::item::{Difficulty, ProjectStatus};
use std::str::FromStr;

/// Label of the catch-all option in category pickers.
pub const ALL_OPTION: &str = "All";

/// Single-select facet value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// Facet untouched; every item passes.
    Any,
    /// Item must carry exactly this value.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> Selection<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Any => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    /// Whether an item's facet value passes this selection.
    ///
    /// An absent value only passes `Any`.
    pub fn accepts(&self, value: Option<&T>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => value.is_some_and(|actual| actual == expected),
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parses a picker value; blank or `all` (any case) means [`Selection::Any`].
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        if is_all_option(raw) {
            return Ok(Self::Any);
        }
        raw.trim().parse().map(Self::Only)
    }
}

impl Selection<String> {
    /// Free-form label selection (category, industry).
    pub fn label(raw: &str) -> Self {
        if is_all_option(raw) {
            Self::Any
        } else {
            Self::Only(raw.trim().to_string())
        }
    }
}

fn is_all_option(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_OPTION)
}

/// Inclusive numeric window; an unset bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Unbounded ranges accept everything; bounded ranges reject absent values.
    pub fn accepts(&self, value: Option<T>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        value.is_some_and(|value| self.contains(value))
    }
}

/// Date window as typed into date inputs.
///
/// Bounds stay raw so malformed input can fail closed at filter time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    /// Whether neither bound carries a value.
    pub fn is_unset(&self) -> bool {
        is_blank(self.start.as_deref()) && is_blank(self.end.as_deref())
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}

/// How multiple selected tags combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMatch {
    /// Item must carry every selected tag.
    #[default]
    All,
    /// Item must carry at least one selected tag.
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Date,
    Difficulty,
    Performance,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Difficulty => "difficulty",
            Self::Performance => "performance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Sort order for the derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

impl Default for Sort {
    /// Newest first.
    fn default() -> Self {
        Self::descending(SortKey::Date)
    }
}

/// Complete filter/sort state of one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text matched against title, excerpt and tags.
    pub query: String,
    pub category: Selection<String>,
    /// Selected tags or technologies, exact labels.
    pub tags: Vec<String>,
    pub tag_match: TagMatch,
    pub status: Selection<ProjectStatus>,
    pub difficulty: Selection<Difficulty>,
    pub industry: Selection<String>,
    pub featured_only: bool,
    pub team_size: RangeFilter<u32>,
    pub date_range: DateRange,
    /// `None` keeps catalog order.
    pub sort: Option<Sort>,
}

impl FilterState {
    /// State with only a free-text query set.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Whether any filter (not sort) narrows the listing.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.category.is_any()
            || !self.tags.is_empty()
            || !self.status.is_any()
            || !self.difficulty.is_any()
            || !self.industry.is_any()
            || self.featured_only
            || !self.team_size.is_unbounded()
            || !self.date_range.is_unset()
    }

    /// Resets filters and sort to the default state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Adds the tag if unselected, removes it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(position) = self.tags.iter().position(|selected| selected == tag) {
            self.tags.remove(position);
        } else {
            self.tags.push(tag.to_string());
        }
    }
}
