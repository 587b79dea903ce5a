//! `catalog-domain` — catalog entities, value objects and domain services.
//!
//! Contains the `Money` value object, the `Category` and `Product` entities
//! with their mutation guards, the repository ports consumed by the
//! application layer, and the cross-entity categorization rule.

pub mod categorization;
pub mod category;
pub mod money;
pub mod product;
pub mod repository;

pub use categorization::ProductCategorizationService;
pub use category::Category;
pub use money::Money;
pub use product::Product;
pub use repository::{CategoryRepository, ProductRepository};
