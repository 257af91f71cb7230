//! Author use-case service.
//!
//! # Responsibility
//! - Register authors and derive their articles, magazines and topics.
//!
//! # Invariants
//! - Author names never change after creation.
//! - `topic_areas` reports `None` for an author without articles, never an
//!   empty list.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{ArticleListQuery, CatalogRepository, RepoResult};
use crate::service::article_service::{register_article, ArticleServiceError};
use crate::service::{load_author, load_magazine, tally};
use log::{debug, info};
use std::collections::HashSet;

/// Use-case service for authors.
pub struct AuthorService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and registers an author.
    ///
    /// Fails with a validation error when `name` is empty.
    pub fn create_author(&self, name: impl Into<String>) -> RepoResult<Author> {
        let author = Author::new(name)?;
        self.repo.insert_author(&author)?;
        info!(
            "event=author_create module=service status=ok author_id={}",
            author.id()
        );
        Ok(author)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    /// Accepts a rename and ignores it. Returns `Ok(false)`.
    pub fn rename_author(&self, id: AuthorId, name: impl Into<String>) -> RepoResult<bool> {
        let mut author = load_author(&self.repo, id)?;
        let applied = author.set_name(name);
        debug!("event=author_rename module=service status=rejected author_id={id}");
        Ok(applied)
    }

    /// Articles written by `id`, in registry order.
    pub fn articles(&self, id: AuthorId) -> RepoResult<Vec<Article>> {
        self.repo.list_articles(&ArticleListQuery::by_author(id))
    }

    /// Magazines this author has written for, one entry per magazine.
    pub fn magazines(&self, id: AuthorId) -> RepoResult<Vec<Magazine>> {
        let articles = self.articles(id)?;
        tally(articles.iter().map(Article::magazine))
            .into_iter()
            .map(|(magazine_id, _)| load_magazine(&self.repo, magazine_id))
            .collect()
    }

    /// Writes a new article for this author.
    ///
    /// Fails exactly like `ArticleService::create_article`.
    pub fn add_article(
        &self,
        id: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Article, ArticleServiceError> {
        register_article(&self.repo, id, magazine, title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self, id: AuthorId) -> RepoResult<Option<Vec<String>>> {
        let magazines = self.magazines(id)?;
        if magazines.is_empty() {
            return Ok(None);
        }

        let mut seen = HashSet::new();
        let categories = magazines
            .into_iter()
            .map(|magazine| magazine.category().to_string())
            .filter(|category| seen.insert(category.clone()))
            .collect();
        Ok(Some(categories))
    }
}
