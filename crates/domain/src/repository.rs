//! Repository ports: the persistence contract consumed by the use cases.
//!
//! One explicit trait per entity, implemented by every adapter (in-memory,
//! SQLite). `add` assigns the id as a side effect when the entity has none;
//! ids are monotonically increasing from 1 and never reused within a
//! repository instance.

use async_trait::async_trait;
use catalog_core::{CategoryId, DomainResult, ProductId};

use crate::{Category, Product};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Looks up a category. Absence is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;

    /// All categories in insertion order.
    async fn get_all(&self) -> DomainResult<Vec<Category>>;

    /// Persists a new category, assigning an id if the entity has none.
    async fn add(&self, category: &mut Category) -> DomainResult<()>;

    /// Overwrites an existing category; `NotFound` if the id is unknown.
    async fn update(&self, category: &Category) -> DomainResult<()>;

    /// Removes a category; `NotFound` if the id is unknown.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Looks up a product. Absence is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;

    /// All products in insertion order.
    async fn get_all(&self) -> DomainResult<Vec<Product>>;

    /// Persists a new product, assigning an id if the entity has none.
    async fn add(&self, product: &mut Product) -> DomainResult<()>;

    /// Overwrites an existing product; `NotFound` if the id is unknown.
    async fn update(&self, product: &Product) -> DomainResult<()>;

    /// Removes a product; `NotFound` if the id is unknown.
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}
