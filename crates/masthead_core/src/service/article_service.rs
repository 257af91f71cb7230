//! Article use-case service.
//!
//! # Responsibility
//! - Create articles and append them to the catalog registry.
//! - Re-point an article's author or magazine.
//!
//! # Invariants
//! - A title that fails validation never reaches the registry.
//! - Re-pointing at an unknown author/magazine fails and leaves the article
//!   unchanged.
//! - Re-pointing happens under one catalog write guard, so concurrent
//!   changes to the same article do not overwrite each other.
//! - Title writes are accepted as calls but never applied.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::ValidationError;
use crate::repo::catalog_repo::{ArticleListQuery, CatalogRepository, RepoError, RepoResult};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from article creation and reference changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleServiceError {
    /// Title failed the length rule.
    Validation(ValidationError),
    /// Referenced author is not in the catalog.
    AuthorNotFound(AuthorId),
    /// Referenced magazine is not in the catalog.
    MagazineNotFound(MagazineId),
    /// Target article is not in the registry.
    ArticleNotFound(ArticleId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for ArticleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ArticleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ArticleServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ArticleServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::AuthorNotFound(id) => Self::AuthorNotFound(id),
            RepoError::MagazineNotFound(id) => Self::MagazineNotFound(id),
            RepoError::ArticleNotFound(id) => Self::ArticleNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service for the article join records.
pub struct ArticleService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one article and appends it to the registry.
    ///
    /// # Errors
    /// - `Validation` when the title is outside 5..=50 characters.
    /// - `AuthorNotFound` / `MagazineNotFound` for ids unknown to the catalog.
    pub fn create_article(
        &self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Article, ArticleServiceError> {
        register_article(&self.repo, author, magazine, title)
    }

    pub fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        self.repo.get_article(id)
    }

    /// Returns the whole registry in creation order.
    pub fn list_articles(&self) -> RepoResult<Vec<Article>> {
        self.repo.list_articles(&ArticleListQuery::default())
    }

    pub fn article_count(&self) -> RepoResult<usize> {
        self.repo.count_articles()
    }

    /// Accepts a title write and ignores it.
    ///
    /// Returns `Ok(false)` for every existing article.
    pub fn set_title(
        &self,
        id: ArticleId,
        title: impl Into<String>,
    ) -> Result<bool, ArticleServiceError> {
        let mut article = self.load_article(id)?;
        let applied = article.set_title(title);
        debug!("event=article_set_title module=service status=rejected article_id={id}");
        Ok(applied)
    }

    /// Points an article at another registered author.
    pub fn reassign_author(
        &self,
        id: ArticleId,
        author: AuthorId,
    ) -> Result<Article, ArticleServiceError> {
        let article = self.repo.set_article_author(id, author)?;
        info!(
            "event=article_reassign module=service status=ok field=author article_id={id} author_id={author}"
        );
        Ok(article)
    }

    /// Points an article at another registered magazine.
    pub fn reassign_magazine(
        &self,
        id: ArticleId,
        magazine: MagazineId,
    ) -> Result<Article, ArticleServiceError> {
        let article = self.repo.set_article_magazine(id, magazine)?;
        info!(
            "event=article_reassign module=service status=ok field=magazine article_id={id} magazine_id={magazine}"
        );
        Ok(article)
    }

    fn load_article(&self, id: ArticleId) -> Result<Article, ArticleServiceError> {
        self.repo
            .get_article(id)?
            .ok_or(ArticleServiceError::ArticleNotFound(id))
    }
}

/// Validates, then appends a new article. Shared by the author-side
/// convenience constructor so both paths fail the same way.
pub(crate) fn register_article<R: CatalogRepository>(
    repo: &R,
    author: AuthorId,
    magazine: MagazineId,
    title: impl Into<String>,
) -> Result<Article, ArticleServiceError> {
    let article = match Article::from_ids(author, magazine, title) {
        Ok(article) => article,
        Err(err) => {
            warn!(
                "event=article_create module=service status=error error_code=invalid_title author_id={author} magazine_id={magazine} error={err}"
            );
            return Err(err.into());
        }
    };

    if let Err(err) = repo.append_article(&article) {
        warn!(
            "event=article_create module=service status=error error_code=append_failed author_id={author} magazine_id={magazine} error={err}"
        );
        return Err(err.into());
    }

    info!(
        "event=article_create module=service status=ok article_id={} author_id={author} magazine_id={magazine}",
        article.id()
    );
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::ArticleServiceError;
    use crate::model::article::ArticleId;
    use crate::model::validation::ValidationError;
    use crate::repo::catalog_repo::RepoError;
    use crate::store::StoreError;
    use std::error::Error;

    #[test]
    fn repo_not_found_maps_to_semantic_variant() {
        let id = crate::model::author::Author::new("Alice").unwrap().id();
        assert_eq!(
            ArticleServiceError::from(RepoError::AuthorNotFound(id)),
            ArticleServiceError::AuthorNotFound(id)
        );
    }

    #[test]
    fn repo_validation_maps_to_validation() {
        let err = ArticleServiceError::from(RepoError::Validation(
            ValidationError::TitleLength { len: 1 },
        ));
        assert_eq!(
            err,
            ArticleServiceError::Validation(ValidationError::TitleLength { len: 1 })
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn store_errors_stay_wrapped() {
        let err = ArticleServiceError::from(RepoError::Store(StoreError::Poisoned("read")));
        assert!(matches!(err, ArticleServiceError::Repo(RepoError::Store(_))));
        assert!(err.to_string().contains("poisoned"));
    }

    #[test]
    fn not_found_display_names_the_id() {
        let author = crate::model::author::Author::new("Alice").unwrap();
        let magazine = crate::model::magazine::Magazine::new("Tech Weekly", "Tech");
        let id: ArticleId = crate::model::article::Article::new(&author, &magazine, "Some title")
            .unwrap()
            .id();
        let message = ArticleServiceError::ArticleNotFound(id).to_string();
        assert_eq!(message, format!("article not found: {id}"));
    }
}
