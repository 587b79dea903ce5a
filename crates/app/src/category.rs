//! Category use cases: Create / Get / List / Update / Delete.

use std::sync::Arc;

use catalog_core::{CategoryId, DomainError, DomainResult, Entity};
use catalog_domain::{Category, CategoryRepository};

/// Creates a category and lets the repository assign its id.
pub struct CreateCategoryUseCase {
    categories: Arc<dyn CategoryRepository>,
}

impl CreateCategoryUseCase {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self, name: &str, description: &str) -> DomainResult<Category> {
        let mut category = Category::new(None, name, description)?;
        self.categories.add(&mut category).await?;
        tracing::info!(id = ?category.id(), name = category.name(), "category created");
        Ok(category)
    }
}

/// Fetches a category; a missing id is `None`, never an error.
pub struct GetCategoryUseCase {
    categories: Arc<dyn CategoryRepository>,
}

impl GetCategoryUseCase {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.categories.get_by_id(id).await
    }
}

/// Lists all categories in insertion order.
pub struct ListCategoriesUseCase {
    categories: Arc<dyn CategoryRepository>,
}

impl ListCategoriesUseCase {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self) -> DomainResult<Vec<Category>> {
        self.categories.get_all().await
    }
}

/// The fields a partial category update may touch. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Partial-update merge: only supplied fields change, each routed through the
/// entity's validated mutators.
pub struct UpdateCategoryUseCase {
    categories: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryUseCase {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self, id: CategoryId, changes: CategoryChanges) -> DomainResult<Category> {
        let mut category = self
            .categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("category", id.as_i64()))?;

        if let Some(name) = changes.name {
            category.change_name(name)?;
        }
        if let Some(description) = changes.description {
            category.update_description(description);
        }

        self.categories.update(&category).await?;
        Ok(category)
    }
}

/// Deletes a category; `NotFound` if the id is unknown.
pub struct DeleteCategoryUseCase {
    categories: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryUseCase {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self, id: CategoryId) -> DomainResult<()> {
        self.categories.delete(id).await?;
        tracing::info!(%id, "category deleted");
        Ok(())
    }
}
