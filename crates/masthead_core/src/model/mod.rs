//! Catalog domain model: authors, magazines and the articles joining them.
//!
//! # Responsibility
//! - Define the entity records and their field-shape rules.
//!
//! # Invariants
//! - Every entity is identified by a stable uuid newtype id.
//! - Entities hold no back-references; relationships live only in the
//!   catalog's article registry.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
