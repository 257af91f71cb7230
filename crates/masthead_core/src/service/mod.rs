//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the author/magazine/article APIs.
//! - Derive relationship queries by scanning the article registry.
//!
//! # Invariants
//! - Services never cache relationships; every query reads the registry.
//! - Deduplicated results keep first-appearance order in the registry.

pub mod article_service;
pub mod author_service;
pub mod magazine_service;

use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of each key, ordered by first appearance.
pub(crate) fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match positions.get(&key) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

pub(crate) fn load_author<R: CatalogRepository>(repo: &R, id: AuthorId) -> RepoResult<Author> {
    repo.get_author(id)?.ok_or(RepoError::AuthorNotFound(id))
}

pub(crate) fn load_magazine<R: CatalogRepository>(
    repo: &R,
    id: MagazineId,
) -> RepoResult<Magazine> {
    repo.get_magazine(id)?.ok_or(RepoError::MagazineNotFound(id))
}
