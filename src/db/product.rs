//! Product database operations

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::product::{NewProduct, Product, ProductCatalog};

/// SQLite-backed product store.
#[derive(Clone)]
pub struct SqliteProductCatalog {
    pool: SqlitePool,
}

impl SqliteProductCatalog {
    /// Open a pool for `url`, creating the database file if needed.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // An in-memory database exists per connection, so keep a single one.
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL CHECK (length(name) <= 100),
                category TEXT NOT NULL CHECK (length(category) <= 50),
                price_cents INTEGER NOT NULL,
                created_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                is_active INTEGER NOT NULL DEFAULT 1
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn insert(&self, product: &NewProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, category, price_cents, created_date, is_active)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, category, price_cents, created_date, is_active
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price_cents)
        .bind(product.created_date)
        .bind(product.is_active)
        .fetch_one(&self.pool)
        .await
    }

    /// Insert the default catalog when the table is empty. Returns the number
    /// of rows inserted.
    pub async fn seed_defaults(&self) -> Result<usize, sqlx::Error> {
        if self.count().await? > 0 {
            return Ok(0);
        }

        let defaults = default_products();
        let mut tx = self.pool.begin().await?;
        for product in &defaults {
            sqlx::query(
                "INSERT INTO products (name, category, price_cents, created_date, is_active) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&product.name)
            .bind(&product.category)
            .bind(product.price_cents)
            .bind(product.created_date)
            .bind(product.is_active)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        log::info!("Seeded {} default products", defaults.len());
        Ok(defaults.len())
    }
}

#[async_trait]
impl ProductCatalog for SqliteProductCatalog {
    async fn active_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, category, price_cents, created_date, is_active FROM products WHERE is_active = 1 ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
    }
}

fn default_products() -> Vec<NewProduct> {
    let entry = |name: &str, category: &str, price_cents: i64, day: u32| NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        created_date: NaiveDate::from_ymd_opt(2024, 12, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default(),
        is_active: true,
    };

    vec![
        entry("Laptop", "Electronics", 99999, 7),
        entry("Mouse", "Electronics", 2999, 12),
        entry("Keyboard", "Electronics", 7999, 17),
        entry("Monitor", "Electronics", 29999, 22),
        entry("Desk Chair", "Furniture", 14999, 27),
    ]
}
