//! Service wiring: repositories + use cases behind one handle.

use std::sync::Arc;

use catalog_app::{CategoryManagement, ProductManagement};
use catalog_core::DomainResult;
use catalog_domain::{CategoryRepository, ProductCategorizationService, ProductRepository};
use catalog_infra::{
    InMemoryCategoryRepository, InMemoryProductRepository, SqliteCategoryRepository,
    SqliteProductRepository,
};

use crate::config::ApiConfig;

/// Everything the handlers need, wired once at startup.
pub struct AppServices {
    pub categories: CategoryManagement,
    pub products: ProductManagement,
    pub categorization: ProductCategorizationService,
}

impl AppServices {
    pub fn with_repositories(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories: CategoryManagement::new(categories.clone()),
            products: ProductManagement::new(products.clone()),
            categorization: ProductCategorizationService::new(categories, products),
        }
    }

    /// In-memory repositories (dev/test mode).
    pub fn in_memory() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryProductRepository::new()),
        )
    }

    /// SQLite-backed repositories; creates the schema if needed.
    pub async fn sqlite(database_url: &str) -> DomainResult<Self> {
        let pool = catalog_infra::connect(database_url).await?;
        catalog_infra::migrate(&pool).await?;
        Ok(Self::with_repositories(
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteProductRepository::new(pool)),
        ))
    }
}

/// Select the persistence binding from configuration.
pub async fn build_services(config: &ApiConfig) -> DomainResult<AppServices> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("using sqlite repositories");
            AppServices::sqlite(url).await
        }
        None => {
            tracing::info!("DATABASE_URL not set; using in-memory repositories");
            Ok(AppServices::in_memory())
        }
    }
}
