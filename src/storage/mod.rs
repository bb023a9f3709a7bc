//! In-memory storage layer.
//!
//! All tables are built once at startup and never change afterwards.
//!
//! ## Components
//!
//! - [`Catalog`]: characters, pictures and casts, plus the lookups between them
//! - [`CatalogBuilder`]: validates records and casts into a [`Catalog`]
//! - [`seed::builtin`]: the dataset served by default

mod catalog;
pub mod seed;

pub use catalog::{Catalog, CatalogBuilder};

impl Catalog {
    /// Build the catalog shipped with the binary.
    pub fn builtin() -> crate::error::Result<Self> {
        seed::builtin()
    }
}
