//! Plain-text excerpts derived from markdown bodies.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\([^)]*\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid code fence regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a single-line excerpt from markdown.
///
/// Rules:
/// - images and fenced code blocks are dropped, links keep their label;
/// - markdown symbols are removed and whitespace collapsed;
/// - output is cut to `max_chars` characters, with `...` appended when cut.
///
/// Returns `None` when nothing readable remains.
pub fn derive_excerpt(markdown: &str, max_chars: usize) -> Option<String> {
    let without_code = CODE_FENCE_RE.replace_all(markdown, " ");
    let without_images = MARKDOWN_IMAGE_RE.replace_all(&without_code, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() || max_chars == 0 {
        return None;
    }

    let mut excerpt = trimmed.chars().take(max_chars).collect::<String>();
    if trimmed.chars().count() > max_chars {
        excerpt = excerpt.trim_end().to_string();
        excerpt.push_str("...");
    }
    Some(excerpt)
}
