//! `catalog-infra` — persistence adapters for the repository ports.
//!
//! Two interchangeable bindings:
//! - `memory`: in-memory reference adapters (tests/dev).
//! - `sqlite`: sqlx-backed adapters for a real store.

pub mod memory;
pub mod sqlite;

pub use memory::{InMemoryCategoryRepository, InMemoryProductRepository};
pub use sqlite::{connect, migrate, SqliteCategoryRepository, SqliteProductRepository};
