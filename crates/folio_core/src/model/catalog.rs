//! Static item list backing one listing page.
//!
//! # Responsibility
//! - Validate authored items and reject duplicate ids.
//! - Load catalogs from JSON, the format content is authored in.
//! - Derive the option lists offered by facet pickers.
//!
//! # Invariants
//! - Items keep their authored order.
//! - Nothing mutates the item list after construction.

use crate::content::excerpt::derive_excerpt;
use crate::content::read_time::{calculate_read_time, DEFAULT_WORDS_PER_MINUTE};
use crate::filter::state::ALL_OPTION;
use crate::model::item::{ContentItem, ItemId, ItemValidationError};
use log::{error, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Upper bound for excerpts derived from a markdown body.
pub const EXCERPT_MAX_CHARS: usize = 160;

/// Catalog construction/loading failure.
#[derive(Debug)]
pub enum CatalogError {
    DuplicateId(ItemId),
    InvalidItem {
        id: ItemId,
        source: ItemValidationError,
    },
    Json(serde_json::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate item id `{id}`"),
            Self::InvalidItem { id, source } => write!(f, "invalid item `{id}`: {source}"),
            Self::Json(err) => write!(f, "invalid catalog json: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::InvalidItem { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Distinct values per facet, sorted, as offered by dropdowns and chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub industries: Vec<String>,
}

/// Validated, read-only list of content items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Builds a catalog from authored items.
    ///
    /// Items with an inline markdown body get an excerpt derived from it when
    /// the excerpt is blank, and a read time estimated from it when none was
    /// authored.
    ///
    /// # Errors
    /// - `InvalidItem` when any item fails `ContentItem::validate()`.
    /// - `DuplicateId` when two items share an id.
    pub fn new(items: Vec<ContentItem>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        let mut accepted = Vec::with_capacity(items.len());

        for mut item in items {
            if let Err(source) = item.validate() {
                return Err(CatalogError::InvalidItem {
                    id: item.id,
                    source,
                });
            }
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.excerpt.trim().is_empty() {
                if let Some(derived) = item
                    .content
                    .as_deref()
                    .and_then(|body| derive_excerpt(body, EXCERPT_MAX_CHARS))
                {
                    item.excerpt = derived;
                }
            }
            if item.read_time.is_none() {
                item.read_time = item
                    .content
                    .as_deref()
                    .map(|body| calculate_read_time(body, DEFAULT_WORDS_PER_MINUTE).minutes);
            }
            accepted.push(item);
        }

        Ok(Self { items: accepted })
    }

    /// Parses a JSON array of items and builds a catalog from it.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<ContentItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Reads and parses a JSON catalog file.
    ///
    /// # Side effects
    /// - Emits `catalog_load` logging events with item count and status.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|raw| Self::from_json_str(&raw));

        match &loaded {
            Ok(catalog) => info!(
                "event=catalog_load module=catalog status=ok items={}",
                catalog.len()
            ),
            Err(err) => error!(
                "event=catalog_load module=catalog status=error error={}",
                err
            ),
        }
        loaded
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ContentItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Distinct categories, tags and industries, each sorted.
    pub fn facet_options(&self) -> FacetOptions {
        let categories: BTreeSet<&str> = self
            .items
            .iter()
            .map(|item| item.category.as_str())
            .collect();
        let tags: BTreeSet<&str> = self
            .items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect();
        let industries: BTreeSet<&str> = self
            .items
            .iter()
            .filter_map(|item| item.industry.as_deref())
            .collect();

        FacetOptions {
            categories: categories.into_iter().map(str::to_string).collect(),
            tags: tags.into_iter().map(str::to_string).collect(),
            industries: industries.into_iter().map(str::to_string).collect(),
        }
    }

    /// Category bar entries: the `All` option, then categories in first-seen
    /// order.
    pub fn category_choices(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut choices = vec![ALL_OPTION.to_string()];
        for item in &self.items {
            if seen.insert(item.category.as_str()) {
                choices.push(item.category.clone());
            }
        }
        choices
    }
}
