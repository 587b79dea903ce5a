//! Product use cases: Create / Get / List / Update / Delete.

use std::sync::Arc;

use catalog_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};
use catalog_domain::{Money, Product, ProductRepository};

/// Creates a product and lets the repository assign its id.
///
/// The category association is taken as given here; existence checks belong
/// to the categorization service.
pub struct CreateProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(
        &self,
        name: &str,
        description: &str,
        price: Money,
        category_id: CategoryId,
        image_urls: Option<Vec<String>>,
    ) -> DomainResult<Product> {
        let mut product = Product::new(None, name, description, price, category_id, image_urls)?;
        self.products.add(&mut product).await?;
        tracing::info!(id = ?product.id(), name = product.name(), "product created");
        Ok(product)
    }
}

/// Fetches a product; a missing id is `None`, never an error.
pub struct GetProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl GetProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, id: ProductId) -> DomainResult<Option<Product>> {
        self.products.get_by_id(id).await
    }
}

/// Lists all products in insertion order.
pub struct ListProductsUseCase {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self) -> DomainResult<Vec<Product>> {
        self.products.get_all().await
    }
}

/// The fields a partial product update may touch. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub image_urls: Option<Vec<String>>,
}

/// Partial-update merge: only supplied fields change.
///
/// Every field goes through the entity's validated mutators, so an invalid
/// value (empty name, malformed image URL) fails the whole update and leaves
/// the stored product untouched.
pub struct UpdateProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, id: ProductId, changes: ProductChanges) -> DomainResult<Product> {
        let mut product = self
            .products
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("product", id.as_i64()))?;

        if let Some(name) = changes.name {
            product.change_name(name)?;
        }
        if let Some(description) = changes.description {
            product.update_description(description);
        }
        if let Some(price) = changes.price {
            product.change_price(price);
        }
        if let Some(category_id) = changes.category_id {
            product.assign_to_category(category_id);
        }
        if let Some(image_urls) = changes.image_urls {
            product.replace_images(image_urls)?;
        }

        self.products.update(&product).await?;
        Ok(product)
    }
}

/// Deletes a product; `NotFound` if the id is unknown.
pub struct DeleteProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl DeleteProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn execute(&self, id: ProductId) -> DomainResult<()> {
        self.products.delete(id).await?;
        tracing::info!(%id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Entity;
    use catalog_infra::InMemoryProductRepository;

    fn repo() -> Arc<dyn ProductRepository> {
        Arc::new(InMemoryProductRepository::new())
    }

    async fn create(repo: Arc<dyn ProductRepository>) -> Product {
        CreateProductUseCase::new(repo)
            .execute(
                "Test Product",
                "A product for tests",
                Money::usd(100.0).unwrap(),
                CategoryId::new(1),
                Some(vec!["http://example.com/image.jpg".to_string()]),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_one_on_fresh_repository() {
        let product = create(repo()).await;
        assert_eq!(product.id(), Some(ProductId::new(1)));
        assert_eq!(product.price(), &Money::usd(100.0).unwrap());
    }

    #[tokio::test]
    async fn create_without_images_yields_empty_list_not_absent() {
        let product = CreateProductUseCase::new(repo())
            .execute("Bare", "", Money::usd(1.0).unwrap(), CategoryId::NONE, None)
            .await
            .unwrap();
        assert!(product.image_urls().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = repo();
        let created = create(repo.clone()).await;
        let fetched = GetProductUseCase::new(repo)
            .execute(created.id().unwrap())
            .await
            .unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn create_rejects_invalid_image_url() {
        let err = CreateProductUseCase::new(repo())
            .execute(
                "P",
                "",
                Money::usd(1.0).unwrap(),
                CategoryId::NONE,
                Some(vec!["no-scheme.example.com".to_string()]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let repo = repo();
        let created = create(repo.clone()).await;

        let updated = UpdateProductUseCase::new(repo)
            .execute(
                created.id().unwrap(),
                ProductChanges {
                    price: Some(Money::usd(80.0).unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price(), &Money::usd(80.0).unwrap());
        assert_eq!(updated.name(), created.name());
        assert_eq!(updated.description(), created.description());
        assert_eq!(updated.image_urls(), created.image_urls());
        assert_eq!(updated.category_id(), created.category_id());
    }

    #[tokio::test]
    async fn update_with_no_fields_returns_entity_unchanged() {
        let repo = repo();
        let created = create(repo.clone()).await;
        let updated = UpdateProductUseCase::new(repo)
            .execute(created.id().unwrap(), ProductChanges::default())
            .await
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn update_unknown_id_fails_with_not_found_referencing_it() {
        let err = UpdateProductUseCase::new(repo())
            .execute(
                ProductId::new(999),
                ProductChanges {
                    name: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("product", 999));
        assert!(err.to_string().contains("999"));
    }

    #[tokio::test]
    async fn update_routes_image_urls_through_validation() {
        let repo = repo();
        let created = create(repo.clone()).await;

        let err = UpdateProductUseCase::new(repo.clone())
            .execute(
                created.id().unwrap(),
                ProductChanges {
                    image_urls: Some(vec!["broken".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // Stored product is untouched by the failed update.
        let stored = GetProductUseCase::new(repo)
            .execute(created.id().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn delete_removes_and_unknown_id_is_not_found() {
        let repo = repo();
        let created = create(repo.clone()).await;

        DeleteProductUseCase::new(repo.clone())
            .execute(created.id().unwrap())
            .await
            .unwrap();

        let err = DeleteProductUseCase::new(repo)
            .execute(ProductId::new(999))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("product", 999));
    }

    #[tokio::test]
    async fn list_returns_products_in_insertion_order() {
        let repo = repo();
        let create_uc = CreateProductUseCase::new(repo.clone());
        for name in ["first", "second"] {
            create_uc
                .execute(name, "", Money::usd(1.0).unwrap(), CategoryId::NONE, None)
                .await
                .unwrap();
        }
        let names: Vec<_> = ListProductsUseCase::new(repo)
            .execute()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}
