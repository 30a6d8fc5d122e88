//! Listing filter/search evaluation.
//!
//! # Responsibility
//! - Derive the visible subset of a listing from its filter state.
//! - Order the subset by the selected sort.
//!
//! # Invariants
//! - The source slice is never mutated; results borrow from it.
//! - Without a sort, results keep source order.
//! - Sorting is stable; ties keep source order in both directions.
//! - Missing or malformed item data excludes the item, never errors.

use crate::content::dates::parse_content_date;
use crate::filter::state::{is_blank, FilterState, Sort, SortDirection, SortKey, TagMatch};
use crate::model::item::ContentItem;
use log::debug;
use std::cmp::Ordering;
use time::Date;

/// Returns the items passing every active filter, ordered by `state.sort`.
///
/// Returns an empty list when nothing matches.
pub fn filter_and_sort<'a>(items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    let compiled = CompiledFilter::compile(state);
    let mut matched = items
        .iter()
        .filter(|item| compiled.accepts(item))
        .collect::<Vec<_>>();

    if let Some(sort) = state.sort {
        matched.sort_by(|left, right| compare_items(left, right, sort));
    }

    debug!(
        "event=listing_filter module=filter status=ok total={} matched={} sort={}",
        items.len(),
        matched.len(),
        sort_label(state.sort)
    );

    matched
}

fn sort_label(sort: Option<Sort>) -> String {
    match sort {
        Some(sort) => format!("{}:{}", sort.key.as_str(), sort.direction.as_str()),
        None => "none".to_string(),
    }
}

/// Whether one item passes every active filter in `state`.
pub fn matches(item: &ContentItem, state: &FilterState) -> bool {
    CompiledFilter::compile(state).accepts(item)
}

/// Date window after parsing the raw bounds once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateWindow {
    Unbounded,
    Bounded {
        start: Option<Date>,
        end: Option<Date>,
    },
    /// A bound could not be parsed; nothing can fall inside it.
    Unsatisfiable,
}

impl DateWindow {
    fn compile(start: Option<&str>, end: Option<&str>) -> Self {
        let start = match parse_bound(start) {
            Ok(bound) => bound,
            Err(()) => return Self::Unsatisfiable,
        };
        let end = match parse_bound(end) {
            Ok(bound) => bound,
            Err(()) => return Self::Unsatisfiable,
        };

        if start.is_none() && end.is_none() {
            Self::Unbounded
        } else {
            Self::Bounded { start, end }
        }
    }

    fn accepts(self, date: Option<Date>) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Unsatisfiable => false,
            Self::Bounded { start, end } => date.is_some_and(|date| {
                start.map_or(true, |start| date >= start) && end.map_or(true, |end| date <= end)
            }),
        }
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<Date>, ()> {
    if is_blank(raw) {
        return Ok(None);
    }
    raw.and_then(parse_content_date).map(Some).ok_or(())
}

/// Filter state with query and date bounds normalized up front.
struct CompiledFilter<'s> {
    state: &'s FilterState,
    needle: Option<String>,
    dates: DateWindow,
}

impl<'s> CompiledFilter<'s> {
    fn compile(state: &'s FilterState) -> Self {
        let trimmed = state.query.trim();
        let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        let dates = DateWindow::compile(
            state.date_range.start.as_deref(),
            state.date_range.end.as_deref(),
        );
        Self {
            state,
            needle,
            dates,
        }
    }

    fn accepts(&self, item: &ContentItem) -> bool {
        let state = self.state;
        self.matches_query(item)
            && state.category.accepts(Some(&item.category))
            && self.matches_tags(item)
            && state.status.accepts(item.status.as_ref())
            && state.difficulty.accepts(item.difficulty.as_ref())
            && state.industry.accepts(item.industry.as_ref())
            && (!state.featured_only || item.featured)
            && state.team_size.accepts(item.team_size)
            && self.dates.accepts(item.parsed_date())
    }

    fn matches_query(&self, item: &ContentItem) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        contains_folded(&item.title, needle)
            || contains_folded(&item.excerpt, needle)
            || item.tags.iter().any(|tag| contains_folded(tag, needle))
    }

    fn matches_tags(&self, item: &ContentItem) -> bool {
        let selected = &self.state.tags;
        if selected.is_empty() {
            return true;
        }
        match self.state.tag_match {
            TagMatch::All => selected.iter().all(|tag| item.has_tag(tag)),
            TagMatch::Any => selected.iter().any(|tag| item.has_tag(tag)),
        }
    }
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

fn compare_items(left: &ContentItem, right: &ContentItem, sort: Sort) -> Ordering {
    match sort.key {
        SortKey::Title => apply_direction(compare_titles(&left.title, &right.title), sort.direction),
        SortKey::Date => {
            compare_present_first(left.parsed_date(), right.parsed_date(), sort.direction)
        }
        SortKey::Difficulty => compare_present_first(
            left.difficulty.map(|level| level.rank()),
            right.difficulty.map(|level| level.rank()),
            sort.direction,
        ),
        SortKey::Performance => apply_direction(
            left.performance_score().cmp(&right.performance_score()),
            sort.direction,
        ),
    }
}

fn compare_titles(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

/// Orders present keys by direction; absent keys go last either way.
fn compare_present_first<K: Ord>(
    left: Option<K>,
    right: Option<K>,
    direction: SortDirection,
) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => apply_direction(left.cmp(&right), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
