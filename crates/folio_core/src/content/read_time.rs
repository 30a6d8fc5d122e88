//! Reading-time estimate for articles.

use std::fmt::{Display, Formatter};

/// Average adult reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimated reading time, never below one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadTime {
    pub minutes: u32,
}

impl Display for ReadTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Estimates reading time by whitespace-separated word count.
///
/// A `words_per_minute` of `0` is treated as `1`.
pub fn calculate_read_time(text: &str, words_per_minute: u32) -> ReadTime {
    let words = text.split_whitespace().count();
    let per_minute = usize::try_from(words_per_minute.max(1)).unwrap_or(usize::MAX);
    let minutes = words.div_ceil(per_minute).max(1);
    ReadTime {
        minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
    }
}
