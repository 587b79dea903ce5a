//! Input-port facades bundling the per-operation use cases.
//!
//! The API and CLI talk to these instead of wiring ten individual structs.

use std::sync::Arc;

use catalog_core::{CategoryId, DomainResult, ProductId};
use catalog_domain::{Category, CategoryRepository, Money, Product, ProductRepository};

use crate::category::{
    CategoryChanges, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase,
    ListCategoriesUseCase, UpdateCategoryUseCase,
};
use crate::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductChanges, UpdateProductUseCase,
};

/// All category operations behind one handle.
pub struct CategoryManagement {
    create: CreateCategoryUseCase,
    get: GetCategoryUseCase,
    list: ListCategoriesUseCase,
    update: UpdateCategoryUseCase,
    delete: DeleteCategoryUseCase,
}

impl CategoryManagement {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self {
            create: CreateCategoryUseCase::new(categories.clone()),
            get: GetCategoryUseCase::new(categories.clone()),
            list: ListCategoriesUseCase::new(categories.clone()),
            update: UpdateCategoryUseCase::new(categories.clone()),
            delete: DeleteCategoryUseCase::new(categories),
        }
    }

    pub async fn create(&self, name: &str, description: &str) -> DomainResult<Category> {
        self.create.execute(name, description).await
    }

    pub async fn get(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.get.execute(id).await
    }

    pub async fn list(&self) -> DomainResult<Vec<Category>> {
        self.list.execute().await
    }

    pub async fn update(&self, id: CategoryId, changes: CategoryChanges) -> DomainResult<Category> {
        self.update.execute(id, changes).await
    }

    pub async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.delete.execute(id).await
    }
}

/// All product operations behind one handle.
pub struct ProductManagement {
    create: CreateProductUseCase,
    get: GetProductUseCase,
    list: ListProductsUseCase,
    update: UpdateProductUseCase,
    delete: DeleteProductUseCase,
}

impl ProductManagement {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self {
            create: CreateProductUseCase::new(products.clone()),
            get: GetProductUseCase::new(products.clone()),
            list: ListProductsUseCase::new(products.clone()),
            update: UpdateProductUseCase::new(products.clone()),
            delete: DeleteProductUseCase::new(products),
        }
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price: Money,
        category_id: CategoryId,
        image_urls: Option<Vec<String>>,
    ) -> DomainResult<Product> {
        self.create
            .execute(name, description, price, category_id, image_urls)
            .await
    }

    pub async fn get(&self, id: ProductId) -> DomainResult<Option<Product>> {
        self.get.execute(id).await
    }

    pub async fn list(&self) -> DomainResult<Vec<Product>> {
        self.list.execute().await
    }

    pub async fn update(&self, id: ProductId, changes: ProductChanges) -> DomainResult<Product> {
        self.update.execute(id, changes).await
    }

    pub async fn delete(&self, id: ProductId) -> DomainResult<()> {
        self.delete.execute(id).await
    }
}
