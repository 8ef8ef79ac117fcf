#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use catalog_export_server::country::{Continent, Country, CountryDirectory};
use catalog_export_server::product::{Product, ProductCatalog};
use catalog_export_server::report::DocumentRenderer;
use catalog_export_server::AppState;
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn product(id: i64, name: &str, category: &str, price_cents: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        created_date: date(2024, 12, 7),
        is_active: true,
    }
}

pub fn laptop() -> Product {
    product(1, "Laptop", "Electronics", 99999)
}

pub fn country(code: &str, name: &str, continent: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        capital: None,
        currency: None,
        phone: None,
        continent: Continent {
            code: continent
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .collect(),
            name: continent.to_string(),
        },
    }
}

/// In-memory product catalog returning a fixed list.
pub struct StaticCatalog {
    pub products: Vec<Product>,
    pub calls: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn active_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

/// Product catalog whose store is always unreachable.
pub struct FailingCatalog;

#[async_trait]
impl ProductCatalog for FailingCatalog {
    async fn active_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Country directory returning a fixed list.
pub struct StaticCountries {
    pub countries: Vec<Country>,
    pub calls: AtomicUsize,
}

impl StaticCountries {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CountryDirectory for StaticCountries {
    async fn get_countries(&self) -> Vec<Country> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.countries.clone()
    }
}

pub fn app_state(
    products: Arc<dyn ProductCatalog>,
    countries: Arc<dyn CountryDirectory>,
) -> web::Data<AppState> {
    web::Data::new(AppState::new_with_parts(
        products,
        countries,
        DocumentRenderer::default(),
    ))
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
