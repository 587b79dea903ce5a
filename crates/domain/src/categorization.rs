//! Cross-entity business rule: assigning a product to a category.

use std::sync::Arc;

use catalog_core::{CategoryId, DomainError, DomainResult, ProductId};

use crate::repository::{CategoryRepository, ProductRepository};
use crate::Product;

/// Enforces the rules the `Product` entity deliberately does not:
/// the target category must exist, and a product may be assigned to a
/// category exactly once through this path.
pub struct ProductCategorizationService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ProductCategorizationService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Assigns `product_id` to `category_id` and persists the product.
    ///
    /// Fails with `NotFound` if either entity is missing and with `Conflict`
    /// if the product already belongs to a category; the stored product is
    /// untouched on failure.
    pub async fn assign_product_to_category(
        &self,
        product_id: ProductId,
        category_id: CategoryId,
    ) -> DomainResult<Product> {
        if self.categories.get_by_id(category_id).await?.is_none() {
            return Err(DomainError::not_found("category", category_id.as_i64()));
        }
        let mut product = self
            .products
            .get_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("product", product_id.as_i64()))?;

        if product.is_categorized() {
            return Err(DomainError::conflict(format!(
                "product {product_id} already belongs to a category"
            )));
        }

        product.assign_to_category(category_id);
        self.products.update(&product).await?;
        Ok(product)
    }
}
