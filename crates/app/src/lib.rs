//! `catalog-app` — application use cases.
//!
//! One struct per use case, each holding the single repository port it
//! orchestrates. The `CategoryManagement` / `ProductManagement` facades bundle
//! them into the input ports consumed by the API and CLI.

pub mod category;
pub mod management;
pub mod product;

pub use category::{
    CategoryChanges, CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase,
    ListCategoriesUseCase, UpdateCategoryUseCase,
};
pub use management::{CategoryManagement, ProductManagement};
pub use product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductChanges, UpdateProductUseCase,
};
