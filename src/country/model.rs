use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct Continent {
    #[schema(example = "NA")]
    #[serde(default)]
    pub code: String,
    #[schema(example = "North America")]
    #[serde(default)]
    pub name: String,
}

/// A country as returned by the countries GraphQL API.
///
/// `capital`, `currency` and `phone` may be absent or null upstream.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct Country {
    #[schema(example = "CA")]
    #[serde(default)]
    pub code: String,
    #[schema(example = "Canada")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "Ottawa")]
    #[serde(default)]
    pub capital: Option<String>,
    #[schema(example = "CAD")]
    #[serde(default)]
    pub currency: Option<String>,
    #[schema(example = "1")]
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub continent: Continent,
}

/// `data` member of the countries query response.
#[derive(Debug, Deserialize, Default)]
pub struct CountriesData {
    #[serde(default)]
    pub countries: Option<Vec<Country>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}
