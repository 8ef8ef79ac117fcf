pub mod handlers;
pub mod model;
pub mod query;
pub mod service;

pub use model::{Continent, Country};
pub use service::{DataUnavailable, GraphQlCountryService};

use async_trait::async_trait;

/// Source of countries for listing and export.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Never fails: an unavailable source is reported as an empty list.
    async fn get_countries(&self) -> Vec<Country>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared<T: Send + Sync + ?Sized>() {}

    #[test]
    fn test_trait_objects_are_shareable() {
        shared::<dyn CountryDirectory>();
        shared::<std::sync::Arc<dyn CountryDirectory>>();
    }
}
