//! Category entity: name/description with mutation guards.

use catalog_core::validate::require_non_empty;
use catalog_core::{CategoryId, DomainResult, Entity};

/// A product category.
///
/// The id is `None` until the repository assigns one on first `add`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
    description: String,
}

impl Category {
    /// Constructs a category, rejecting an empty name.
    ///
    /// The description may be empty.
    pub fn new(
        id: Option<CategoryId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        require_non_empty("category name", &name)?;
        Ok(Self {
            id,
            name,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the name; rejects an empty one.
    pub fn change_name(&mut self, new_name: impl Into<String>) -> DomainResult<()> {
        let new_name = new_name.into();
        require_non_empty("category name", &new_name)?;
        self.name = new_name;
        Ok(())
    }

    /// Replaces the description (any string, including empty).
    pub fn update_description(&mut self, new_description: impl Into<String>) {
        self.description = new_description.into();
    }

    /// Pure predicate: a category may be deleted only when no products
    /// reference it. The caller supplies the count; the entity never
    /// queries it.
    pub fn can_be_deleted(&self, product_count: usize) -> bool {
        product_count == 0
    }

    /// Records the repository-assigned id. Called by adapters on `add`.
    pub fn assign_id(&mut self, id: CategoryId) {
        self.id = Some(id);
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Option<CategoryId> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::DomainError;

    #[test]
    fn new_category_has_no_id_until_persisted() {
        let mut category = Category::new(None, "Electronics", "Electronic Products").unwrap();
        assert_eq!(category.id(), None);
        category.assign_id(CategoryId::new(1));
        assert_eq!(category.id(), Some(CategoryId::new(1)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Category::new(None, "", "whatever").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn allows_empty_description() {
        let category = Category::new(None, "Books", "").unwrap();
        assert_eq!(category.description(), "");
    }

    #[test]
    fn change_name_rejects_empty() {
        let mut category = Category::new(None, "Books", "").unwrap();
        assert!(category.change_name("  ").is_err());
        assert_eq!(category.name(), "Books");
    }

    #[test]
    fn change_name_replaces_name() {
        let mut category = Category::new(None, "Books", "").unwrap();
        category.change_name("Comics").unwrap();
        assert_eq!(category.name(), "Comics");
    }

    #[test]
    fn update_description_accepts_any_string() {
        let mut category = Category::new(None, "Books", "old").unwrap();
        category.update_description("");
        assert_eq!(category.description(), "");
    }

    #[test]
    fn can_be_deleted_only_without_products() {
        let category = Category::new(None, "Books", "").unwrap();
        assert!(category.can_be_deleted(0));
        assert!(!category.can_be_deleted(1));
        assert!(!category.can_be_deleted(42));
    }
}
