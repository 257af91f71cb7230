//! Field-shape rules shared by the catalog entities.
//!
//! # Responsibility
//! - Define the length bounds for titles and magazine names.
//! - Provide the fatal validation error raised by constructors.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, never bytes.
//! - Only constructor paths return `ValidationError`; setters report
//!   rejection through a `bool` instead.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shortest accepted article title.
pub const TITLE_MIN_CHARS: usize = 5;
/// Longest accepted article title.
pub const TITLE_MAX_CHARS: usize = 50;
/// Shortest name accepted by `Magazine::set_name`.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Longest name accepted by `Magazine::set_name`.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// An author needs at least this many articles in one magazine to count as
/// a contributing author of it.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 3;

/// Fatal construction error for catalog entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty.
    EmptyAuthorName,
    /// Article title character count is outside the accepted range.
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Checks an article title against the accepted length range.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::TitleLength { len })
    }
}

/// Checks an author name at construction time.
pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Returns whether `name` may replace a magazine's current name.
pub fn is_acceptable_magazine_name(name: &str) -> bool {
    (MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&name.chars().count())
}

/// Returns whether `category` may replace a magazine's current category.
pub fn is_acceptable_category(category: &str) -> bool {
    !category.is_empty()
}
