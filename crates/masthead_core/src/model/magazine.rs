//! Magazine domain model.
//!
//! # Invariants
//! - Construction stores `name` and `category` as given.
//! - Setters only apply values that pass the field-shape rules; a rejected
//!   value leaves the previous one in place.
//! - Identity is the `id`, never the mutable name/category.

use super::validation::{is_acceptable_category, is_acceptable_magazine_name};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of a magazine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MagazineId(Uuid);

impl MagazineId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for MagazineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A publication that articles appear in.
#[derive(Debug, Clone)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a magazine with a generated id.
    ///
    /// No validation happens here; only the setters check their input.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: MagazineId::generate(),
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when it is 2..=16 characters long.
    ///
    /// Returns whether the new value was applied.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !is_acceptable_magazine_name(&name) {
            return false;
        }
        self.name = name;
        true
    }

    /// Replaces the category when it is non-empty.
    ///
    /// Returns whether the new value was applied.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if !is_acceptable_category(&category) {
            return false;
        }
        self.category = category;
        true
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
