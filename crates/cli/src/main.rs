//! Command-per-operation catalog CLI, persisting through the SQLite adapter.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use catalog_app::{CategoryChanges, CategoryManagement, ProductChanges, ProductManagement};
use catalog_core::{CategoryId, Entity, ProductId};
use catalog_domain::{Category, Money, Product, ProductCategorizationService};
use catalog_infra::{SqliteCategoryRepository, SqliteProductRepository};

#[derive(Parser)]
#[command(name = "catalog-cli", about = "Manage the product catalog from the command line")]
struct Cli {
    /// SQLite connection URL.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://catalog.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Category operations.
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Product operations.
    #[command(subcommand)]
    Product(ProductCommand),
    /// Assign a product to a category (allowed once per product).
    Assign {
        #[arg(long)]
        product_id: i64,
        #[arg(long)]
        category_id: i64,
    },
}

#[derive(Subcommand)]
enum CategoryCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Get {
        id: i64,
    },
    List,
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum ProductCommand {
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = Money::DEFAULT_CURRENCY)]
        currency: String,
        /// 0 means "no category".
        #[arg(long, default_value_t = 0)]
        category_id: i64,
        #[arg(long = "image-url")]
        image_urls: Vec<String>,
    },
    Get {
        id: i64,
    },
    List,
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long = "image-url")]
        image_urls: Option<Vec<String>>,
    },
    Delete {
        id: i64,
    },
}

fn echo_category(category: &Category) {
    let id = category.id().map(|id| id.as_i64()).unwrap_or_default();
    println!("category {}: {} - {}", id, category.name(), category.description());
}

fn echo_product(product: &Product) {
    let id = product.id().map(|id| id.as_i64()).unwrap_or_default();
    println!(
        "product {}: {} ({}) category={} images={}",
        id,
        product.name(),
        product.price(),
        product.category_id(),
        product.image_urls().len()
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let cli = Cli::parse();

    let pool = catalog_infra::connect(&cli.database_url).await?;
    catalog_infra::migrate(&pool).await?;

    let categories = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let products = Arc::new(SqliteProductRepository::new(pool));

    match cli.command {
        Command::Category(cmd) => {
            let mgmt = CategoryManagement::new(categories);
            match cmd {
                CategoryCommand::Create { name, description } => {
                    let category = mgmt.create(&name, &description).await?;
                    println!("created:");
                    echo_category(&category);
                }
                CategoryCommand::Get { id } => match mgmt.get(CategoryId::new(id)).await? {
                    Some(category) => echo_category(&category),
                    None => println!("no category with id {id}"),
                },
                CategoryCommand::List => {
                    for category in mgmt.list().await? {
                        echo_category(&category);
                    }
                }
                CategoryCommand::Update {
                    id,
                    name,
                    description,
                } => {
                    let category = mgmt
                        .update(CategoryId::new(id), CategoryChanges { name, description })
                        .await?;
                    println!("updated:");
                    echo_category(&category);
                }
                CategoryCommand::Delete { id } => {
                    mgmt.delete(CategoryId::new(id)).await?;
                    println!("deleted category {id}");
                }
            }
        }
        Command::Product(cmd) => {
            let mgmt = ProductManagement::new(products);
            match cmd {
                ProductCommand::Create {
                    name,
                    description,
                    amount,
                    currency,
                    category_id,
                    image_urls,
                } => {
                    let price = Money::new(amount, currency)?;
                    let images = if image_urls.is_empty() {
                        None
                    } else {
                        Some(image_urls)
                    };
                    let product = mgmt
                        .create(&name, &description, price, CategoryId::new(category_id), images)
                        .await?;
                    println!("created:");
                    echo_product(&product);
                }
                ProductCommand::Get { id } => match mgmt.get(ProductId::new(id)).await? {
                    Some(product) => echo_product(&product),
                    None => println!("no product with id {id}"),
                },
                ProductCommand::List => {
                    for product in mgmt.list().await? {
                        echo_product(&product);
                    }
                }
                ProductCommand::Update {
                    id,
                    name,
                    description,
                    amount,
                    currency,
                    category_id,
                    image_urls,
                } => {
                    let price = match (amount, currency) {
                        (Some(amount), Some(currency)) => Some(Money::new(amount, currency)?),
                        (Some(amount), None) => Some(Money::usd(amount)?),
                        (None, Some(_)) => {
                            anyhow::bail!("--currency requires --amount");
                        }
                        (None, None) => None,
                    };
                    let changes = ProductChanges {
                        name,
                        description,
                        price,
                        category_id: category_id.map(CategoryId::new),
                        image_urls,
                    };
                    let product = mgmt.update(ProductId::new(id), changes).await?;
                    println!("updated:");
                    echo_product(&product);
                }
                ProductCommand::Delete { id } => {
                    mgmt.delete(ProductId::new(id)).await?;
                    println!("deleted product {id}");
                }
            }
        }
        Command::Assign {
            product_id,
            category_id,
        } => {
            let service = ProductCategorizationService::new(categories, products);
            let product = service
                .assign_product_to_category(ProductId::new(product_id), CategoryId::new(category_id))
                .await?;
            println!("assigned:");
            echo_product(&product);
        }
    }

    Ok(())
}
