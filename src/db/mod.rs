//! Database module - AppState and the data providers it wires together
//!
//! - `product` - SQLite product catalog operations

pub mod product;

pub use product::SqliteProductCatalog;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::country::{CountryDirectory, GraphQlCountryService};
use crate::product::ProductCatalog;
use crate::report::DocumentRenderer;

/// Shared handler state. Every collaborator is passed in explicitly.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductCatalog>,
    pub countries: Arc<dyn CountryDirectory>,
    pub renderer: DocumentRenderer,
}

impl AppState {
    pub async fn new_with_config(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = SqliteProductCatalog::connect(&config.database_url).await?;
        catalog.ensure_schema().await?;
        if config.seed_products {
            catalog.seed_defaults().await?;
        }

        let http_client = reqwest::Client::builder()
            .pool_idle_timeout(std::time::Duration::from_secs(900))
            .timeout(config.countries_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let countries = GraphQlCountryService::new(http_client, config.graphql_endpoint.clone());

        Ok(Self::new_with_parts(
            Arc::new(catalog),
            Arc::new(countries),
            DocumentRenderer::default(),
        ))
    }

    pub fn new_with_parts(
        products: Arc<dyn ProductCatalog>,
        countries: Arc<dyn CountryDirectory>,
        renderer: DocumentRenderer,
    ) -> Self {
        AppState {
            products,
            countries,
            renderer,
        }
    }
}
