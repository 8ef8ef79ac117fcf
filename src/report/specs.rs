//! Column layouts for the product and country reports.

use super::format::{format_currency, format_date, format_status, or_placeholder};
use super::spec::{DocumentSpec, Record};
use crate::country::Country;
use crate::product::Product;

pub fn products_spec() -> DocumentSpec<Product> {
    DocumentSpec::new("products")
        .column("ID", |p: &Product| p.id.to_string())
        .column("Name", |p: &Product| p.name.clone())
        .column("Category", |p: &Product| p.category.clone())
        .column("Price", |p: &Product| format_currency(p.price_cents))
        .column("Created Date", |p: &Product| format_date(&p.created_date))
        .column("Status", |p: &Product| format_status(p.is_active))
}

pub fn countries_spec() -> DocumentSpec<Country> {
    DocumentSpec::new("countries")
        .column("Code", |c: &Country| c.code.clone())
        .column("Name", |c: &Country| c.name.clone())
        .column("Capital", |c: &Country| or_placeholder(c.capital.as_deref()))
        .column("Currency", |c: &Country| or_placeholder(c.currency.as_deref()))
        .column("Phone", |c: &Country| or_placeholder(c.phone.as_deref()))
        .column("Continent", |c: &Country| c.continent.name.clone())
}

impl Record for Product {
    fn document_spec() -> DocumentSpec<Self> {
        products_spec()
    }
}

impl Record for Country {
    fn document_spec() -> DocumentSpec<Self> {
        countries_spec()
    }
}
