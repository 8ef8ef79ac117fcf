//! GraphQL-backed country directory.
//!
//! `fetch_countries` reports every failure as a [`DataUnavailable`];
//! `get_countries` (the [`CountryDirectory`] contract) collapses those failures
//! into an empty list after logging them, so callers cannot tell "upstream
//! failed" from "upstream has no countries".

use async_trait::async_trait;
use thiserror::Error;

use super::model::{CountriesData, Country, GraphQlRequest, GraphQlResponse};
use super::query::GET_ALL_COUNTRIES;
use super::CountryDirectory;

/// Reasons the country list could not be obtained.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("request to country endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("country endpoint responded with status {0}")]
    Status(u16),
    #[error("malformed country response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("GraphQL errors: {}", .0.join(", "))]
    Query(Vec<String>),
}

pub struct GraphQlCountryService {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQlCountryService {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Run the countries query once.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, DataUnavailable> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query: GET_ALL_COUNTRIES,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataUnavailable::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_countries_response(&body)
    }
}

#[async_trait]
impl CountryDirectory for GraphQlCountryService {
    async fn get_countries(&self) -> Vec<Country> {
        match self.fetch_countries().await {
            Ok(countries) => {
                log::debug!("Fetched {} countries from {}", countries.len(), self.endpoint);
                countries
            }
            Err(e) => {
                log::error!("Error fetching countries from GraphQL API: {}", e);
                Vec::new()
            }
        }
    }
}

/// Decode a GraphQL response body. Reported query errors take precedence over
/// any partial data; a missing `data` or `countries` member yields an empty list.
pub fn parse_countries_response(body: &[u8]) -> Result<Vec<Country>, DataUnavailable> {
    let response: GraphQlResponse<CountriesData> = serde_json::from_slice(body)?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(DataUnavailable::Query(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    Ok(response
        .data
        .and_then(|data| data.countries)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_countries() {
        let body = br#"{
            "data": {
                "countries": [
                    { "code": "US", "name": "United States", "capital": "Washington D.C.",
                      "currency": "USD,USN,USS", "phone": "1",
                      "continent": { "code": "NA", "name": "North America" } },
                    { "code": "CA", "name": "Canada", "capital": "Ottawa",
                      "currency": "CAD", "phone": "1",
                      "continent": { "code": "NA", "name": "North America" } }
                ]
            }
        }"#;

        let countries = parse_countries_response(body).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].code, "US");
        assert_eq!(countries[1].code, "CA");
        assert_eq!(countries[1].continent.name, "North America");
    }

    #[test]
    fn test_parse_reported_errors() {
        let body = br#"{
            "data": null,
            "errors": [ { "message": "Cannot query field" }, { "message": "Second problem" } ]
        }"#;

        let err = parse_countries_response(body).unwrap_err();
        assert!(matches!(err, DataUnavailable::Query(ref messages) if messages.len() == 2));
        assert_eq!(err.to_string(), "GraphQL errors: Cannot query field, Second problem");
    }

    #[test]
    fn test_parse_empty_errors_is_success() {
        let body = br#"{ "data": { "countries": [] }, "errors": [] }"#;
        assert!(parse_countries_response(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_data() {
        assert!(parse_countries_response(br#"{ "data": null }"#).unwrap().is_empty());
        assert!(parse_countries_response(br#"{ "data": {} }"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_countries_response(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DataUnavailable::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_empty_list() {
        let service = GraphQlCountryService::new(reqwest::Client::new(), "http://127.0.0.1:1/graphql");

        assert!(matches!(
            service.fetch_countries().await,
            Err(DataUnavailable::Transport(_))
        ));
        assert!(service.get_countries().await.is_empty());
    }
}
