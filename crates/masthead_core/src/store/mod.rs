//! In-memory catalog store and its bootstrap entry points.
//!
//! # Responsibility
//! - Own the authors, magazines and the ordered article registry.
//! - Serialize writers so registry appends keep insertion order.
//!
//! # Invariants
//! - The article registry is append-only; no removal path exists.
//! - One writer at a time, any number of concurrent readers.
//! - Callers reach the state only through repositories.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

mod open;

pub use open::open_catalog;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A writer panicked while holding the catalog lock.
    Poisoned(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poisoned(access) => write!(f, "catalog lock poisoned during {access}"),
        }
    }
}

impl Error for StoreError {}

/// Entity tables held by a catalog.
///
/// `articles` is the registry: creation order, append-only.
#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub(crate) authors: Vec<Author>,
    pub(crate) magazines: Vec<Magazine>,
    pub(crate) articles: Vec<Article>,
}

/// Process-lifetime store shared by every repository and service.
///
/// Create one with [`open_catalog`] and hand references to the repositories
/// that need it. Separate catalogs are fully isolated from each other.
#[derive(Debug, Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> StoreResult<RwLockReadGuard<'_, CatalogState>> {
        self.state.read().map_err(|_| StoreError::Poisoned("read"))
    }

    pub(crate) fn write(&self) -> StoreResult<RwLockWriteGuard<'_, CatalogState>> {
        self.state.write().map_err(|_| StoreError::Poisoned("write"))
    }
}
