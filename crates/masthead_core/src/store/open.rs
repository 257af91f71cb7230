//! Catalog bootstrap.
//!
//! # Invariants
//! - Every call returns a fresh, empty catalog; nothing is shared globally.

use super::Catalog;
use log::info;

/// Opens an empty in-memory catalog.
///
/// # Side effects
/// - Emits a `catalog_open` logging event.
pub fn open_catalog() -> Catalog {
    let catalog = Catalog::new();
    info!("event=catalog_open module=store status=ok mode=memory");
    catalog
}
