use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product as stored in the `products` table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema, sqlx::FromRow)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = "Electronics")]
    pub category: String,
    /// Price in cents.
    #[schema(example = 99999)]
    pub price_cents: i64,
    #[schema(example = "2024-12-07T00:00:00")]
    pub created_date: NaiveDateTime,
    pub is_active: bool,
}

/// Fields for inserting a product; the id is assigned by the store.
#[derive(Debug, Deserialize, Clone, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub created_date: NaiveDateTime,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_product_serialization() {
        let product = Product {
            id: 1,
            name: "Laptop".to_string(),
            category: "Electronics".to_string(),
            price_cents: 99999,
            created_date: NaiveDate::from_ymd_opt(2024, 12, 7)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            is_active: true,
        };

        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }

    #[test]
    fn test_new_product_defaults_to_active() {
        let json = r#"{
            "name": "Mouse",
            "category": "Electronics",
            "price_cents": 2999,
            "created_date": "2024-12-12T00:00:00"
        }"#;

        let product: NewProduct = serde_json::from_str(json).unwrap();
        assert!(product.is_active);
        assert_eq!(product.price_cents, 2999);
    }
}
