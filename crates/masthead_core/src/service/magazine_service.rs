//! Magazine use-case service.
//!
//! # Responsibility
//! - Register magazines and apply validated name/category changes.
//! - Derive contributors, titles and the catalog-wide top publisher.
//!
//! # Invariants
//! - Rejected renames leave the stored magazine untouched.
//! - Name and category changes are checked and applied under one catalog
//!   write guard.
//! - `article_titles` and `contributing_authors` return `None` rather than an
//!   empty list.
//! - `top_publisher` ties go to the magazine whose first article appears
//!   earliest in the registry.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::CONTRIBUTING_AUTHOR_MIN_ARTICLES;
use crate::repo::catalog_repo::{ArticleListQuery, CatalogRepository, RepoResult};
use crate::service::{load_author, load_magazine, tally};
use log::{debug, info};

/// Use-case service for magazines.
pub struct MagazineService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> MagazineService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a magazine. Name and category are stored as given.
    pub fn create_magazine(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let magazine = Magazine::new(name, category);
        self.repo.insert_magazine(&magazine)?;
        info!(
            "event=magazine_create module=service status=ok magazine_id={}",
            magazine.id()
        );
        Ok(magazine)
    }

    pub fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        self.repo.get_magazine(id)
    }

    /// All magazines in creation order.
    pub fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        self.repo.list_magazines()
    }

    /// Renames a magazine if the new name is 2..=16 characters.
    ///
    /// Returns whether the rename was applied.
    pub fn rename_magazine(&self, id: MagazineId, name: impl Into<String>) -> RepoResult<bool> {
        let name: String = name.into();
        if !self.repo.set_magazine_name(id, &name)? {
            debug!("event=magazine_rename module=service status=rejected magazine_id={id}");
            return Ok(false);
        }
        debug!("event=magazine_rename module=service status=ok magazine_id={id}");
        Ok(true)
    }

    /// Changes the category if the new one is non-empty.
    ///
    /// Returns whether the change was applied.
    pub fn recategorize_magazine(
        &self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<bool> {
        let category: String = category.into();
        if !self.repo.set_magazine_category(id, &category)? {
            debug!("event=magazine_recategorize module=service status=rejected magazine_id={id}");
            return Ok(false);
        }
        debug!("event=magazine_recategorize module=service status=ok magazine_id={id}");
        Ok(true)
    }

    /// Articles published in `id`, in registry order.
    pub fn articles(&self, id: MagazineId) -> RepoResult<Vec<Article>> {
        self.repo.list_articles(&ArticleListQuery::by_magazine(id))
    }

    /// Authors who wrote for this magazine, one entry per author.
    pub fn contributors(&self, id: MagazineId) -> RepoResult<Vec<Author>> {
        Ok(self
            .article_counts_by_author(id)?
            .into_iter()
            .map(|(author, _)| author)
            .collect())
    }

    /// Titles in registry order, or `None` when nothing was published here.
    pub fn article_titles(&self, id: MagazineId) -> RepoResult<Option<Vec<String>>> {
        let articles = self.articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            articles
                .iter()
                .map(|article| article.title().to_string())
                .collect(),
        ))
    }

    /// Number of articles each contributor wrote for this magazine, ordered
    /// by each author's first article here.
    pub fn article_counts_by_author(&self, id: MagazineId) -> RepoResult<Vec<(Author, usize)>> {
        let articles = self.articles(id)?;
        tally(articles.iter().map(Article::author))
            .into_iter()
            .map(|(author_id, count)| Ok((load_author(&self.repo, author_id)?, count)))
            .collect()
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// Returns `None` both when the magazine has no articles and when no
    /// author qualifies. Use `article_counts_by_author` to tell them apart.
    pub fn contributing_authors(&self, id: MagazineId) -> RepoResult<Option<Vec<Author>>> {
        let authors: Vec<Author> = self
            .article_counts_by_author(id)?
            .into_iter()
            .filter(|(_, count)| *count >= CONTRIBUTING_AUTHOR_MIN_ARTICLES)
            .map(|(author, _)| author)
            .collect();
        if authors.is_empty() {
            return Ok(None);
        }
        Ok(Some(authors))
    }

    /// The magazine with the most articles across the whole catalog.
    ///
    /// Returns `None` while the registry is empty.
    pub fn top_publisher(&self) -> RepoResult<Option<Magazine>> {
        let articles = self.repo.list_articles(&ArticleListQuery::default())?;
        let mut top: Option<(MagazineId, usize)> = None;
        for (magazine_id, count) in tally(articles.iter().map(Article::magazine)) {
            // Strictly greater: earlier magazines win ties.
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((magazine_id, count));
            }
        }

        match top {
            Some((magazine_id, _)) => Ok(Some(load_magazine(&self.repo, magazine_id)?)),
            None => Ok(None),
        }
    }
}
