//! Content item domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by blog-post and project listings.
//! - Validate authored content before it reaches the listing filter.
//!
//! # Invariants
//! - `tags` holds no duplicates and no blank labels.
//! - Every item carries exactly one non-blank `category`.
//! - `date` is kept as authored; parsing happens on read so a malformed
//!   value only excludes the item from date-based filters.
//!
//! # See also
//! - `crate::model::catalog` for id uniqueness across a listing.

use crate::content::dates::parse_content_date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use time::Date;

/// Authoring-time identifier of a content item.
///
/// Blog posts and projects were historically numbered or slugged, so both
/// shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Which listing an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    BlogPost,
    Project,
}

/// Delivery state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ParseFacetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "planned" => Ok(Self::Planned),
            _ => Err(ParseFacetError::new("status", value)),
        }
    }
}

/// Project difficulty, ordered `beginner < intermediate < advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Fixed rank used by difficulty sorting.
    pub fn rank(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseFacetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseFacetError::new("difficulty", value)),
        }
    }
}

/// Unknown label for an enumerated facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFacetError {
    pub facet: &'static str,
    pub value: String,
}

impl ParseFacetError {
    fn new(facet: &'static str, value: &str) -> Self {
        Self {
            facet,
            value: value.to_string(),
        }
    }
}

impl Display for ParseFacetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.facet, self.value)
    }
}

impl Error for ParseFacetError {}

/// Build and audit figures shown on project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Seconds.
    pub build_time: u32,
    /// Kilobytes.
    pub bundle_size: u32,
    /// Lighthouse score, 0..=100.
    pub lighthouse: u32,
}

/// Validation failures for authored content items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    BlankTitle,
    BlankCategory,
    BlankTag,
    DuplicateTag(String),
    InvalidTeamSize(u32),
    InvalidLighthouseScore(u32),
    /// `readTime` label without a leading minute count.
    InvalidReadTime(String),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title cannot be blank"),
            Self::BlankCategory => write!(f, "category cannot be blank"),
            Self::BlankTag => write!(f, "tags cannot contain blank labels"),
            Self::DuplicateTag(tag) => write!(f, "duplicate tag `{tag}`"),
            Self::InvalidTeamSize(size) => write!(f, "team size must be >= 1, got {size}"),
            Self::InvalidLighthouseScore(score) => {
                write!(f, "lighthouse score must be <= 100, got {score}")
            }
            Self::InvalidReadTime(label) => {
                write!(f, "read time must look like `8 min read`, got `{label}`")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// One entry of a blog or project listing.
///
/// Project-only facets stay optional so a single shape serves both
/// listings; a facet that is absent never satisfies an active filter on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContentItemRecord")]
pub struct ContentItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    /// Blog excerpt or project description.
    pub excerpt: String,
    /// Full markdown body, when authored inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub category: String,
    /// Tags for posts, technologies for projects.
    pub tags: Vec<String>,
    /// Publish date for posts, start date for projects.
    pub date: Option<String>,
    pub status: Option<ProjectStatus>,
    pub difficulty: Option<Difficulty>,
    pub featured: bool,
    pub team_size: Option<u32>,
    pub industry: Option<String>,
    pub performance: Option<Performance>,
    /// Minutes.
    pub read_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ContentItem {
    /// Creates an item with every optional facet unset.
    pub fn new(
        id: impl Into<ItemId>,
        kind: ItemKind,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            excerpt: String::new(),
            content: None,
            category: category.into(),
            tags: Vec::new(),
            date: None,
            status: None,
            difficulty: None,
            featured: false,
            team_size: None,
            industry: None,
            performance: None,
            read_time: None,
            image: None,
            link: None,
        }
    }

    pub fn blog_post(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut item = Self::new(id, ItemKind::BlogPost, title, category);
        item.excerpt = excerpt.into();
        item
    }

    pub fn project(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut item = Self::new(id, ItemKind::Project, title, category);
        item.excerpt = description.into();
        item
    }

    /// Replaces tags, dropping repeats and keeping first occurrence order.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        self.tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|tag| seen.insert(tag.clone()))
            .collect();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_team_size(mut self, team_size: u32) -> Self {
        self.team_size = Some(team_size);
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_performance(mut self, performance: Performance) -> Self {
        self.performance = Some(performance);
        self
    }

    /// Validates authoring invariants.
    ///
    /// # Errors
    /// - Blank title, category or tag label.
    /// - A tag listed twice.
    /// - `team_size == 0` or a lighthouse score above 100.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::BlankTitle);
        }
        if self.category.trim().is_empty() {
            return Err(ItemValidationError::BlankCategory);
        }

        let mut seen = BTreeSet::new();
        for tag in &self.tags {
            if tag.trim().is_empty() {
                return Err(ItemValidationError::BlankTag);
            }
            if !seen.insert(tag.as_str()) {
                return Err(ItemValidationError::DuplicateTag(tag.clone()));
            }
        }

        if let Some(size) = self.team_size.filter(|size| *size == 0) {
            return Err(ItemValidationError::InvalidTeamSize(size));
        }
        if let Some(performance) = self.performance.filter(|perf| perf.lighthouse > 100) {
            return Err(ItemValidationError::InvalidLighthouseScore(
                performance.lighthouse,
            ));
        }

        Ok(())
    }

    /// Parsed `date`, or `None` when absent or malformed.
    pub fn parsed_date(&self) -> Option<Date> {
        self.date.as_deref().and_then(parse_content_date)
    }

    /// Lighthouse score used for sorting; `0` when no figures are recorded.
    pub fn performance_score(&self) -> u32 {
        self.performance.map_or(0, |perf| perf.lighthouse)
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// Wire shape accepted from authored catalogs, including legacy field names.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentItemRecord {
    id: ItemId,
    #[serde(default)]
    kind: Option<ItemKind>,
    title: String,
    #[serde(default, alias = "description")]
    excerpt: String,
    #[serde(default)]
    content: Option<String>,
    category: String,
    #[serde(default, alias = "technologies")]
    tags: Vec<String>,
    #[serde(default, alias = "startDate", alias = "publishedAt")]
    date: Option<String>,
    #[serde(default)]
    status: Option<ProjectStatus>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    team_size: Option<u32>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    performance: Option<Performance>,
    #[serde(default)]
    read_time: Option<ReadTimeField>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

/// `readTime` as a minute count or a card label such as `"8 min read"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReadTimeField {
    Minutes(u32),
    Label(String),
}

impl ReadTimeField {
    fn minutes(self) -> Result<u32, ItemValidationError> {
        match self {
            Self::Minutes(minutes) => Ok(minutes),
            Self::Label(label) => label
                .split_whitespace()
                .next()
                .and_then(|count| count.parse().ok())
                .ok_or(ItemValidationError::InvalidReadTime(label)),
        }
    }
}

impl ContentItemRecord {
    /// Records without `kind` are projects when they carry a project facet.
    fn inferred_kind(&self) -> ItemKind {
        let has_project_facet = self.status.is_some()
            || self.difficulty.is_some()
            || self.team_size.is_some()
            || self.industry.is_some()
            || self.performance.is_some();
        if has_project_facet {
            ItemKind::Project
        } else {
            ItemKind::BlogPost
        }
    }
}

impl TryFrom<ContentItemRecord> for ContentItem {
    type Error = ItemValidationError;

    fn try_from(record: ContentItemRecord) -> Result<Self, Self::Error> {
        let kind = record.kind.unwrap_or_else(|| record.inferred_kind());
        let read_time = record.read_time.map(ReadTimeField::minutes).transpose()?;
        let item = Self {
            id: record.id,
            kind,
            title: record.title,
            excerpt: record.excerpt,
            content: record.content,
            category: record.category,
            tags: record.tags,
            date: record.date,
            status: record.status,
            difficulty: record.difficulty,
            featured: record.featured,
            team_size: record.team_size,
            industry: record.industry,
            performance: record.performance,
            read_time,
            image: record.image,
            link: record.link,
        };
        item.validate()?;
        Ok(item)
    }
}
