//! Catalog repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable insert/get/list APIs over authors, magazines and the
//!   article registry.
//! - Keep lock handling inside the store boundary.
//!
//! # Invariants
//! - Article appends re-check the title rule and require both referenced
//!   entities to be present in the same catalog.
//! - An id is appended at most once; the registry keeps insertion order.
//! - Returned entities are snapshots. Field changes go through the `set_*`
//!   operations, which check, apply and store under one write guard.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use crate::store::{Catalog, CatalogState, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    Store(StoreError),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
    DuplicateId(Uuid),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::DuplicateId(id) => write!(f, "id already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::AuthorNotFound(_)
            | Self::MagazineNotFound(_)
            | Self::ArticleNotFound(_)
            | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Filter options for listing registry articles.
///
/// Unset fields match everything; results always follow registry order.
#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    pub author: Option<AuthorId>,
    pub magazine: Option<MagazineId>,
}

impl ArticleListQuery {
    pub fn by_author(author: AuthorId) -> Self {
        Self {
            author: Some(author),
            magazine: None,
        }
    }

    pub fn by_magazine(magazine: MagazineId) -> Self {
        Self {
            author: None,
            magazine: Some(magazine),
        }
    }

    fn matches(&self, article: &Article) -> bool {
        self.author.map_or(true, |id| article.author() == id)
            && self.magazine.map_or(true, |id| article.magazine() == id)
    }
}

/// Repository interface for catalog entities.
pub trait CatalogRepository {
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    fn insert_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId>;
    fn set_magazine_name(&self, id: MagazineId, name: &str) -> RepoResult<bool>;
    fn set_magazine_category(&self, id: MagazineId, category: &str) -> RepoResult<bool>;
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
    fn list_magazines(&self) -> RepoResult<Vec<Magazine>>;
    fn append_article(&self, article: &Article) -> RepoResult<ArticleId>;
    fn set_article_author(&self, id: ArticleId, author: AuthorId) -> RepoResult<Article>;
    fn set_article_magazine(&self, id: ArticleId, magazine: MagazineId) -> RepoResult<Article>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>>;
    fn count_articles(&self) -> RepoResult<usize>;
}

/// Repository over an in-memory [`Catalog`].
pub struct InMemoryCatalogRepository<'cat> {
    catalog: &'cat Catalog,
}

impl<'cat> InMemoryCatalogRepository<'cat> {
    pub fn new(catalog: &'cat Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogRepository for InMemoryCatalogRepository<'_> {
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId> {
        let mut state = self.catalog.write()?;
        if find_author(&state, author.id()).is_some() {
            return Err(RepoError::DuplicateId(author.id().as_uuid()));
        }
        state.authors.push(author.clone());
        Ok(author.id())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let state = self.catalog.read()?;
        Ok(find_author(&state, id).cloned())
    }

    fn insert_magazine(&self, magazine: &Magazine) -> RepoResult<MagazineId> {
        let mut state = self.catalog.write()?;
        if find_magazine(&state, magazine.id()).is_some() {
            return Err(RepoError::DuplicateId(magazine.id().as_uuid()));
        }
        state.magazines.push(magazine.clone());
        Ok(magazine.id())
    }

    fn set_magazine_name(&self, id: MagazineId, name: &str) -> RepoResult<bool> {
        let mut state = self.catalog.write()?;
        Ok(find_magazine_mut(&mut state, id)?.set_name(name))
    }

    fn set_magazine_category(&self, id: MagazineId, category: &str) -> RepoResult<bool> {
        let mut state = self.catalog.write()?;
        Ok(find_magazine_mut(&mut state, id)?.set_category(category))
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        let state = self.catalog.read()?;
        Ok(find_magazine(&state, id).cloned())
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        let state = self.catalog.read()?;
        Ok(state.magazines.clone())
    }

    fn append_article(&self, article: &Article) -> RepoResult<ArticleId> {
        article.validate()?;

        let mut state = self.catalog.write()?;
        ensure_references(&state, article)?;
        if find_article_index(&state, article.id()).is_some() {
            return Err(RepoError::DuplicateId(article.id().as_uuid()));
        }
        state.articles.push(article.clone());
        Ok(article.id())
    }

    fn set_article_author(&self, id: ArticleId, author: AuthorId) -> RepoResult<Article> {
        let mut state = self.catalog.write()?;
        let index = find_article_index(&state, id).ok_or(RepoError::ArticleNotFound(id))?;
        let author = find_author(&state, author)
            .cloned()
            .ok_or(RepoError::AuthorNotFound(author))?;
        // Same slot, so registry order is unaffected.
        let article = &mut state.articles[index];
        article.set_author(&author);
        Ok(article.clone())
    }

    fn set_article_magazine(&self, id: ArticleId, magazine: MagazineId) -> RepoResult<Article> {
        let mut state = self.catalog.write()?;
        let index = find_article_index(&state, id).ok_or(RepoError::ArticleNotFound(id))?;
        let magazine = find_magazine(&state, magazine)
            .cloned()
            .ok_or(RepoError::MagazineNotFound(magazine))?;
        let article = &mut state.articles[index];
        article.set_magazine(&magazine);
        Ok(article.clone())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let state = self.catalog.read()?;
        Ok(find_article_index(&state, id).map(|index| state.articles[index].clone()))
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>> {
        let state = self.catalog.read()?;
        Ok(state
            .articles
            .iter()
            .filter(|article| query.matches(article))
            .cloned()
            .collect())
    }

    fn count_articles(&self) -> RepoResult<usize> {
        Ok(self.catalog.read()?.articles.len())
    }
}

fn find_author(state: &CatalogState, id: AuthorId) -> Option<&Author> {
    state.authors.iter().find(|author| author.id() == id)
}

fn find_magazine(state: &CatalogState, id: MagazineId) -> Option<&Magazine> {
    state.magazines.iter().find(|magazine| magazine.id() == id)
}

fn find_magazine_mut(state: &mut CatalogState, id: MagazineId) -> RepoResult<&mut Magazine> {
    state
        .magazines
        .iter_mut()
        .find(|magazine| magazine.id() == id)
        .ok_or(RepoError::MagazineNotFound(id))
}

fn find_article_index(state: &CatalogState, id: ArticleId) -> Option<usize> {
    state.articles.iter().position(|article| article.id() == id)
}

fn ensure_references(state: &CatalogState, article: &Article) -> RepoResult<()> {
    if find_author(state, article.author()).is_none() {
        return Err(RepoError::AuthorNotFound(article.author()));
    }
    if find_magazine(state, article.magazine()).is_none() {
        return Err(RepoError::MagazineNotFound(article.magazine()));
    }
    Ok(())
}
