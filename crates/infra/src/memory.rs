//! In-memory repository adapters.
//!
//! Intended for tests/dev. Each repository owns its own monotonic id
//! allocator (starting at 1, never reused), so no process-global state is
//! involved. Keys are allocated in increasing order, which makes `BTreeMap`
//! iteration equal to insertion order.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use catalog_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};
use catalog_domain::{Category, CategoryRepository, Product, ProductRepository};

#[derive(Debug)]
struct Shelf<T> {
    items: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Shelf<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Shelf<T> {
    /// Hands out the next id; ids given to explicitly-keyed inserts are
    /// skipped so an id is never reused.
    fn allocate(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reserve_through(&mut self, id: i64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("lock poisoned")
}

/// In-memory category repository.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    shelf: RwLock<Shelf<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let shelf = self.shelf.read().map_err(|_| poisoned())?;
        Ok(shelf.items.get(&id.as_i64()).cloned())
    }

    async fn get_all(&self) -> DomainResult<Vec<Category>> {
        let shelf = self.shelf.read().map_err(|_| poisoned())?;
        Ok(shelf.items.values().cloned().collect())
    }

    async fn add(&self, category: &mut Category) -> DomainResult<()> {
        let mut shelf = self.shelf.write().map_err(|_| poisoned())?;
        let id = match category.id() {
            Some(id) => {
                shelf.reserve_through(id.as_i64());
                id
            }
            None => {
                let id = CategoryId::new(shelf.allocate());
                category.assign_id(id);
                id
            }
        };
        shelf.items.insert(id.as_i64(), category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        let id = category
            .id()
            .ok_or_else(|| DomainError::validation("cannot update an unpersisted category"))?;
        let mut shelf = self.shelf.write().map_err(|_| poisoned())?;
        if !shelf.items.contains_key(&id.as_i64()) {
            return Err(DomainError::not_found("category", id.as_i64()));
        }
        shelf.items.insert(id.as_i64(), category.clone());
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut shelf = self.shelf.write().map_err(|_| poisoned())?;
        if shelf.items.remove(&id.as_i64()).is_none() {
            return Err(DomainError::not_found("category", id.as_i64()));
        }
        Ok(())
    }
}

/// In-memory product repository.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    shelf: RwLock<Shelf<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let shelf = self.shelf.read().map_err(|_| poisoned())?;
        Ok(shelf.items.get(&id.as_i64()).cloned())
    }

    async fn get_all(&self) -> DomainResult<Vec<Product>> {
        let shelf = self.shelf.read().map_err(|_| poisoned())?;
        Ok(shelf.items.values().cloned().collect())
    }

    async fn add(&self, product: &mut Product) -> DomainResult<()> {
        let mut shelf = self.shelf.write().map_err(|_| poisoned())?;
        let id = match product.id() {
            Some(id) => {
                shelf.reserve_through(id.as_i64());
                id
            }
            None => {
                let id = ProductId::new(shelf.allocate());
                product.assign_id(id);
                id
            }
        };
        shelf.items.insert(id.as_i64(), product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> DomainResult<()> {
        let id = product
            .id()
            .ok_or_else(|| DomainError::validation("cannot update an unpersisted product"))?;
        let mut shelf = self.shelf.write().map_err(|_| poisoned())?;
        if !shelf.items.contains_key(&id.as_i64()) {
            return Err(DomainError::not_found("product", id.as_i64()));
        }
        shelf.items.insert(id.as_i64(), product.clone());
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let mut shelf = self.shelf.write().map_err(|_| poisoned())?;
        if shelf.items.remove(&id.as_i64()).is_none() {
            return Err(DomainError::not_found("product", id.as_i64()));
        }
        Ok(())
    }
}
