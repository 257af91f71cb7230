//! Article join record.
//!
//! # Responsibility
//! - Link exactly one author to exactly one magazine under a title.
//!
//! # Invariants
//! - `title` is 5..=50 characters at construction and fixed afterwards.
//! - `author` and `magazine` may be re-pointed, but only at real
//!   `Author`/`Magazine` values; the catalog additionally checks that the
//!   target is registered.

use super::author::{Author, AuthorId};
use super::magazine::{Magazine, MagazineId};
use super::validation::{validate_title, ValidationError};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(Uuid);

impl ArticleId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Join record between one author and one magazine.
///
/// Holds ids rather than copies so renaming a magazine is visible through
/// every article that references it. Equality is by `id`.
#[derive(Debug, Clone)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    /// Builds an unregistered article.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when the title is outside 5..=50
    ///   characters.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::from_ids(author.id(), magazine.id(), title)
    }

    /// Builds an unregistered article from already-known ids.
    ///
    /// Reference existence is not checked here; the repository does that
    /// on append.
    pub fn from_ids(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ArticleId::generate(),
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Titles never change after construction. Always returns `false`.
    pub fn set_title(&mut self, _title: impl Into<String>) -> bool {
        false
    }

    /// Points this article at another author.
    pub fn set_author(&mut self, author: &Author) {
        self.author = author.id();
    }

    /// Points this article at another magazine.
    pub fn set_magazine(&mut self, magazine: &Magazine) {
        self.magazine = magazine.id();
    }

    /// Re-checks the title rule, used when accepting records at a boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::author::Author;
    use crate::model::magazine::Magazine;
    use crate::model::validation::ValidationError;
    use std::collections::HashSet;

    #[test]
    fn new_stores_references_and_title() {
        let author = Author::new("Alice").unwrap();
        let magazine = Magazine::new("Tech Weekly", "Tech");
        let article = Article::new(&author, &magazine, "Rust in Production").unwrap();

        assert_eq!(article.title(), "Rust in Production");
        assert_eq!(article.author(), author.id());
        assert_eq!(article.magazine(), magazine.id());
    }

    #[test]
    fn new_rejects_short_title() {
        let author = Author::new("Alice").unwrap();
        let magazine = Magazine::new("Tech Weekly", "Tech");
        let err = Article::new(&author, &magazine, "hi").unwrap_err();
        assert_eq!(err, ValidationError::TitleLength { len: 2 });
    }

    #[test]
    fn set_title_is_ignored() {
        let author = Author::new("Alice").unwrap();
        let magazine = Magazine::new("Tech Weekly", "Tech");
        let mut article = Article::new(&author, &magazine, "Original title").unwrap();

        assert!(!article.set_title("Another title"));
        assert!(!article.set_title(""));
        assert_eq!(article.title(), "Original title");
    }

    #[test]
    fn references_can_be_repointed() {
        let alice = Author::new("Alice").unwrap();
        let bob = Author::new("Bob").unwrap();
        let tech = Magazine::new("Tech Weekly", "Tech");
        let food = Magazine::new("Food Monthly", "Food");
        let mut article = Article::new(&alice, &tech, "Original title").unwrap();
        let id = article.id();

        article.set_author(&bob);
        article.set_magazine(&food);

        assert_eq!(article.id(), id);
        assert_eq!(article.author(), bob.id());
        assert_eq!(article.magazine(), food.id());
    }

    #[test]
    fn equality_follows_identity_across_repointing() {
        let alice = Author::new("Alice").unwrap();
        let bob = Author::new("Bob").unwrap();
        let tech = Magazine::new("Tech Weekly", "Tech");
        let before = Article::new(&alice, &tech, "Same article").unwrap();
        let mut after = before.clone();
        after.set_author(&bob);

        assert_eq!(before, after);
        let mut seen = HashSet::new();
        seen.insert(before);
        assert!(!seen.insert(after));

        let twin = Article::new(&alice, &tech, "Same article").unwrap();
        assert!(seen.insert(twin));
    }
}
