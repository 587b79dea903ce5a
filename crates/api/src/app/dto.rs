use serde::Deserialize;

use catalog_app::{CategoryChanges, ProductChanges};
use catalog_core::{CategoryId, DomainResult, Entity};
use catalog_domain::{Category, Money, Product};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceBody {
    pub amount: f64,
    pub currency: Option<String>,
}

impl PriceBody {
    pub fn into_money(self) -> DomainResult<Money> {
        match self.currency {
            Some(currency) => Money::new(self.amount, currency),
            None => Money::usd(self.amount),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: PriceBody,
    pub category_id: Option<i64>,
    pub image_urls: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceBody>,
    pub category_id: Option<i64>,
    pub image_urls: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct AddImageRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignCategoryRequest {
    pub category_id: i64,
}

impl From<UpdateCategoryRequest> for CategoryChanges {
    fn from(req: UpdateCategoryRequest) -> Self {
        CategoryChanges {
            name: req.name,
            description: req.description,
        }
    }
}

impl UpdateProductRequest {
    pub fn into_changes(self) -> DomainResult<ProductChanges> {
        Ok(ProductChanges {
            name: self.name,
            description: self.description,
            price: self.price.map(PriceBody::into_money).transpose()?,
            category_id: self.category_id.map(CategoryId::new),
            image_urls: self.image_urls,
        })
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn category_to_json(category: &Category) -> serde_json::Value {
    serde_json::json!({
        "id": category.id().map(|id| id.as_i64()),
        "name": category.name(),
        "description": category.description(),
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id().map(|id| id.as_i64()),
        "name": product.name(),
        "description": product.description(),
        "price": {
            "amount": product.price().amount(),
            "currency": product.price().currency(),
        },
        "category_id": product.category_id().as_i64(),
        "image_urls": product.image_urls(),
    })
}
