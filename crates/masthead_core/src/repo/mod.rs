//! Repository layer over the catalog store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate lock handling from service/business orchestration.
//!
//! # Invariants
//! - Repository writes re-check model validation before mutating state.
//! - Repository APIs return semantic not-found errors in addition to store
//!   errors.

pub mod catalog_repo;
