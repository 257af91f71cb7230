//! Author domain model.
//!
//! # Responsibility
//! - Define the writer record linked to magazines through articles.
//!
//! # Invariants
//! - `name` is non-empty at construction and never changes afterwards.
//! - Identity is the `id`; two authors with the same name stay distinct.

use super::validation::{validate_author_name, ValidationError};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AuthorId(Uuid);

impl AuthorId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A writer. Holds no back-references; its articles are derived from the
/// catalog registry on demand.
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates an author with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: AuthorId::generate(),
            name,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author names are fixed after construction.
    ///
    /// Always returns `false` and leaves the name untouched.
    pub fn set_name(&mut self, _name: impl Into<String>) -> bool {
        false
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
