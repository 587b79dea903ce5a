//! SQLite repository adapters (sqlx).
//!
//! Ids come from `INTEGER PRIMARY KEY AUTOINCREMENT`, which matches the port
//! contract: monotonically increasing from 1 and never reused, even after
//! deletes. Image URLs are stored as a JSON array in a TEXT column.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use catalog_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};
use catalog_domain::{Category, CategoryRepository, Money, Product, ProductRepository};

fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::storage(e.to_string())
}

/// Opens a connection pool for `database_url` (e.g. `sqlite://catalog.db?mode=rwc`).
pub async fn connect(database_url: &str) -> DomainResult<SqlitePool> {
    SqlitePoolOptions::new()
        .connect(database_url)
        .await
        .map_err(db_err)
}

/// Creates the schema if it does not exist yet.
pub async fn migrate(pool: &SqlitePool) -> DomainResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(pool)
    .await
    .map_err(db_err)?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price_amount REAL NOT NULL,
            price_currency TEXT NOT NULL,
            category_id INTEGER NOT NULL DEFAULT 0,
            image_urls TEXT NOT NULL DEFAULT '[]'
        )",
    )
    .execute(pool)
    .await
    .map_err(db_err)?;

    tracing::debug!("sqlite schema ready");
    Ok(())
}

/// SQLite-backed category repository.
#[derive(Debug, Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> DomainResult<Category> {
        let id: i64 = row.get("id");
        let name: String = row.get("name");
        let description: String = row.get("description");
        Category::new(Some(CategoryId::new(id)), name, description)
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn get_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query("SELECT id, name, description FROM categories WHERE id = ?")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        row.as_ref().map(Self::row_to_category).transpose()
    }

    async fn get_all(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;
        rows.iter().map(Self::row_to_category).collect()
    }

    async fn add(&self, category: &mut Category) -> DomainResult<()> {
        match category.id() {
            Some(id) => {
                sqlx::query("INSERT INTO categories (id, name, description) VALUES (?, ?, ?)")
                    .bind(id.as_i64())
                    .bind(category.name())
                    .bind(category.description())
                    .execute(&self.pool)
                    .await
                    .map_err(db_err)?;
            }
            None => {
                let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
                    .bind(category.name())
                    .bind(category.description())
                    .execute(&self.pool)
                    .await
                    .map_err(db_err)?;
                category.assign_id(CategoryId::new(result.last_insert_rowid()));
            }
        }
        Ok(())
    }

    async fn update(&self, category: &Category) -> DomainResult<()> {
        let id = category
            .id()
            .ok_or_else(|| DomainError::validation("cannot update an unpersisted category"))?;
        let result = sqlx::query("UPDATE categories SET name = ?, description = ? WHERE id = ?")
            .bind(category.name())
            .bind(category.description())
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("category", id.as_i64()));
        }
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("category", id.as_i64()));
        }
        Ok(())
    }
}

/// SQLite-backed product repository.
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> DomainResult<Product> {
        let id: i64 = row.get("id");
        let name: String = row.get("name");
        let description: String = row.get("description");
        let amount: f64 = row.get("price_amount");
        let currency: String = row.get("price_currency");
        let category_id: i64 = row.get("category_id");
        let image_urls: String = row.get("image_urls");
        let image_urls: Vec<String> = serde_json::from_str(&image_urls)
            .map_err(|e| DomainError::storage(format!("corrupt image_urls column: {e}")))?;

        Product::new(
            Some(ProductId::new(id)),
            name,
            description,
            Money::new(amount, currency)?,
            CategoryId::new(category_id),
            Some(image_urls),
        )
    }

    fn images_json(product: &Product) -> DomainResult<String> {
        serde_json::to_string(product.image_urls())
            .map_err(|e| DomainError::storage(format!("cannot encode image_urls: {e}")))
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row = sqlx::query(
            "SELECT id, name, description, price_amount, price_currency, category_id, image_urls
             FROM products WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn get_all(&self) -> DomainResult<Vec<Product>> {
        let rows = sqlx::query(
            "SELECT id, name, description, price_amount, price_currency, category_id, image_urls
             FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        rows.iter().map(Self::row_to_product).collect()
    }

    async fn add(&self, product: &mut Product) -> DomainResult<()> {
        let images = Self::images_json(product)?;
        match product.id() {
            Some(id) => {
                sqlx::query(
                    "INSERT INTO products
                     (id, name, description, price_amount, price_currency, category_id, image_urls)
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(id.as_i64())
                .bind(product.name())
                .bind(product.description())
                .bind(product.price().amount())
                .bind(product.price().currency())
                .bind(product.category_id().as_i64())
                .bind(images)
                .execute(&self.pool)
                .await
                .map_err(db_err)?;
            }
            None => {
                let result = sqlx::query(
                    "INSERT INTO products
                     (name, description, price_amount, price_currency, category_id, image_urls)
                     VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(product.name())
                .bind(product.description())
                .bind(product.price().amount())
                .bind(product.price().currency())
                .bind(product.category_id().as_i64())
                .bind(images)
                .execute(&self.pool)
                .await
                .map_err(db_err)?;
                product.assign_id(ProductId::new(result.last_insert_rowid()));
            }
        }
        Ok(())
    }

    async fn update(&self, product: &Product) -> DomainResult<()> {
        let id = product
            .id()
            .ok_or_else(|| DomainError::validation("cannot update an unpersisted product"))?;
        let images = Self::images_json(product)?;
        let result = sqlx::query(
            "UPDATE products
             SET name = ?, description = ?, price_amount = ?, price_currency = ?,
                 category_id = ?, image_urls = ?
             WHERE id = ?",
        )
        .bind(product.name())
        .bind(product.description())
        .bind(product.price().amount())
        .bind(product.price().currency())
        .bind(product.category_id().as_i64())
        .bind(images)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("product", id.as_i64()));
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("product", id.as_i64()));
        }
        Ok(())
    }
}
