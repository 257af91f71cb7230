//! Core relationship model for Masthead.
//! Authors and magazines linked through article join records, with every
//! relationship derived from one ordered article registry.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::ValidationError;
pub use repo::catalog_repo::{
    ArticleListQuery, CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult,
};
pub use service::article_service::{ArticleService, ArticleServiceError};
pub use service::author_service::AuthorService;
pub use service::magazine_service::MagazineService;
pub use store::{open_catalog, Catalog, StoreError};

/// Minimal health-check API for linkage checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
