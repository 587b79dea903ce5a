//! Product entity: name/description/price/category association/image list.

use catalog_core::validate::{require_non_empty, require_valid_url};
use catalog_core::{CategoryId, DomainResult, Entity, ProductId};

use crate::money::Money;

/// A catalog product.
///
/// Belongs to at most one category via `category_id`; `CategoryId::NONE`
/// means "no category". The association is not checked referentially here -
/// that is the categorization service's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    description: String,
    price: Money,
    category_id: CategoryId,
    image_urls: Vec<String>,
}

impl Product {
    /// Constructs a product, validating the name and every image URL.
    ///
    /// Each URL must parse as an absolute URL with both a scheme and a host.
    /// An omitted image list defaults to an empty one.
    pub fn new(
        id: Option<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category_id: CategoryId,
        image_urls: Option<Vec<String>>,
    ) -> DomainResult<Self> {
        let name = name.into();
        require_non_empty("product name", &name)?;
        let image_urls = image_urls.unwrap_or_default();
        for url in &image_urls {
            require_valid_url(url)?;
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            category_id,
            image_urls,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    /// Whether the product currently belongs to a category.
    pub fn is_categorized(&self) -> bool {
        !self.category_id.is_unassigned()
    }

    /// Replaces the name; rejects an empty one.
    pub fn change_name(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        require_non_empty("product name", &new_name)?;
        self.name = new_name;
        Ok(())
    }

    /// Replaces the description (any string, including empty).
    pub fn update_description(&mut self, new_description: impl Into<String>) {
        self.description = new_description.into();
    }

    /// Replaces the price. `Money` upholds its own invariants.
    pub fn change_price(&mut self, new_price: Money) {
        self.price = new_price;
    }

    /// Validates and appends an image URL.
    pub fn add_image(&mut self, image_url: impl Into<String>) -> DomainResult<()> {
        let image_url = image_url.into();
        require_valid_url(&image_url)?;
        self.image_urls.push(image_url);
        Ok(())
    }

    /// Validates every URL, then replaces the whole image list.
    pub fn replace_images(&mut self, image_urls: Vec<String>) -> DomainResult<()> {
        for url in &image_urls {
            require_valid_url(url)?;
        }
        self.image_urls = image_urls;
        Ok(())
    }

    /// Unconditionally re-points the category association.
    ///
    /// No existence check: single-assignment and referential enforcement
    /// live in [`crate::ProductCategorizationService`].
    pub fn assign_to_category(&mut self, category_id: CategoryId) {
        self.category_id = category_id;
    }

    /// Records the repository-assigned id. Called by adapters on `add`.
    pub fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }
}
