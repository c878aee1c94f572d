// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps Platform client
// PURPOSE: Handle geocoding, nearby search and reverse geocoding calls

use crate::errors::GourmetError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic coordinates in Google wire form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangular bounds of a geocoded area
/// DOCUMENTATION: Invariant: northeast >= southwest on both axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

impl Bounds {
    /// Degenerate zero-area box around a single location
    /// Used when a geocode result carries no bounds
    pub fn point(location: LatLng) -> Self {
        Self {
            northeast: location,
            southwest: location,
        }
    }
}

/// Geometry of a nearby-search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}

/// One place from a nearby search
/// DOCUMENTATION: Immutable once fetched; place_id is the global identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NearbyPlace {
    /// Google's opaque, globally unique place identifier
    pub place_id: String,
    /// Place name
    pub name: String,
    /// Coarse address from nearby search (may be absent)
    pub vicinity: Option<String>,
    /// Geographic location
    pub geometry: PlaceGeometry,
}

/// One page of nearby-search results
#[derive(Debug, Clone, Default)]
pub struct NearbyPage {
    pub places: Vec<NearbyPlace>,
    /// Continuation token for the next page, when more results exist
    pub next_page_token: Option<String>,
}

/// Geometry of a geocoding result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeGeometry {
    pub location: LatLng,
    /// Area bounds; absent for point matches
    pub bounds: Option<Bounds>,
}

/// Address component from geocoding results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    /// Component granularity tags (e.g., ["sublocality", "political"])
    pub types: Vec<String>,
}

/// One geocoding / reverse-geocoding result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeResult {
    pub geometry: GeocodeGeometry,
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Google Maps Platform operations used by the search pipeline
/// DOCUMENTATION: Trait seam so the pipeline runs against scripted stubs in
/// tests; GoogleMapsClient is the production implementation
#[async_trait]
pub trait MapsApi: Send + Sync {
    /// Resolve a free-text address to geocoding results
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, GourmetError>;

    /// Nearby search around a point for a keyword/type pair
    async fn nearby_search(
        &self,
        location: LatLng,
        radius: u32,
        keyword: &str,
        place_type: &str,
    ) -> Result<NearbyPage, GourmetError>;

    /// Fetch a continuation page of an earlier nearby search
    async fn nearby_search_page(&self, page_token: &str) -> Result<NearbyPage, GourmetError>;

    /// Resolve coordinates to address information
    async fn reverse_geocode(&self, location: LatLng) -> Result<Vec<GeocodeResult>, GourmetError>;
}

/// Wire shape of a nearby-search response
#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<NearbyPlace>,
    status: String,
    next_page_token: Option<String>,
    error_message: Option<String>,
}

/// Wire shape of a geocoding response
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    status: String,
    error_message: Option<String>,
}

/// Google Maps Platform client
/// DOCUMENTATION: Handles authentication and API calls against the
/// geocoding and places endpoints; all requests are made in Japanese
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for Google Maps Platform
    base_url: String,
}

impl GoogleMapsClient {
    /// Create new Google Maps client
    /// DOCUMENTATION: Initializes client with API key
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
        }
    }

    /// Check a Google API status field, mapping failures to errors
    fn check_status(
        status: &str,
        error_message: Option<String>,
    ) -> Result<(), GourmetError> {
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            "OVER_QUERY_LIMIT" => {
                log::error!("Google Maps API quota exceeded");
                Err(GourmetError::RateLimitExceeded)
            }
            "REQUEST_DENIED" | "INVALID_REQUEST" => {
                let msg = error_message.unwrap_or_else(|| format!("Request rejected: {}", status));
                log::error!("Google Maps API request rejected: {}", msg);
                Err(GourmetError::ExternalApi(msg))
            }
            other => {
                let msg = error_message.unwrap_or_else(|| format!("Unknown status: {}", other));
                log::error!("Google Maps API unexpected status: {}", msg);
                Err(GourmetError::ExternalApi(msg))
            }
        }
    }

    /// Perform one GET against a Maps endpoint and parse the JSON body
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        params: &HashMap<&'static str, String>,
    ) -> Result<T, GourmetError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Maps API request failed: {}", e);
                GourmetError::ExternalApi(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Maps API error {}: {}", status, body);
            return Err(GourmetError::ExternalApi(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Maps response: {}", e);
            GourmetError::ExternalApi(format!("Parse error: {}", e))
        })
    }

    /// Shared query-parameter base: credential and response language
    fn base_params(&self) -> HashMap<&'static str, String> {
        let mut params = HashMap::new();
        params.insert("key", self.api_key.clone());
        params.insert("language", "ja".to_string());
        params
    }

    async fn fetch_nearby(
        &self,
        params: HashMap<&'static str, String>,
    ) -> Result<NearbyPage, GourmetError> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);
        let api_response: NearbySearchResponse = self.get_json(&url, &params).await?;

        Self::check_status(&api_response.status, api_response.error_message)?;

        Ok(NearbyPage {
            places: api_response.results,
            next_page_token: api_response.next_page_token,
        })
    }

    async fn fetch_geocode(
        &self,
        params: HashMap<&'static str, String>,
    ) -> Result<Vec<GeocodeResult>, GourmetError> {
        let url = format!("{}/geocode/json", self.base_url);
        let api_response: GeocodeResponse = self.get_json(&url, &params).await?;

        Self::check_status(&api_response.status, api_response.error_message)?;

        Ok(api_response.results)
    }
}

#[async_trait]
impl MapsApi for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, GourmetError> {
        log::debug!("Geocoding address: {}", address);

        let mut params = self.base_params();
        params.insert("address", address.to_string());

        self.fetch_geocode(params).await
    }

    async fn nearby_search(
        &self,
        location: LatLng,
        radius: u32,
        keyword: &str,
        place_type: &str,
    ) -> Result<NearbyPage, GourmetError> {
        log::debug!(
            "Nearby search: lat={}, lng={}, radius={}, keyword={}",
            location.lat,
            location.lng,
            radius,
            keyword
        );

        let mut params = self.base_params();
        params.insert("location", format!("{},{}", location.lat, location.lng));
        params.insert("radius", radius.to_string());
        params.insert("keyword", keyword.to_string());
        params.insert("type", place_type.to_string());

        self.fetch_nearby(params).await
    }

    async fn nearby_search_page(&self, page_token: &str) -> Result<NearbyPage, GourmetError> {
        log::debug!("Nearby search continuation page");

        let mut params = self.base_params();
        params.insert("pagetoken", page_token.to_string());

        self.fetch_nearby(params).await
    }

    async fn reverse_geocode(&self, location: LatLng) -> Result<Vec<GeocodeResult>, GourmetError> {
        log::debug!("Reverse geocoding: ({}, {})", location.lat, location.lng);

        let mut params = self.base_params();
        params.insert("latlng", format!("{},{}", location.lat, location.lng));

        self.fetch_geocode(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nearby_search_response() {
        let json = r#"{
            "results": [{
                "place_id": "ChIJabc123",
                "name": "蕎麦処 山田",
                "vicinity": "千代田区神田1-2-3",
                "geometry": {"location": {"lat": 35.6917, "lng": 139.7708}}
            }],
            "status": "OK",
            "next_page_token": "CpQCAgEAAA"
        }"#;

        let parsed: NearbySearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.status, "OK");
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].place_id, "ChIJabc123");
        assert_eq!(parsed.next_page_token.as_deref(), Some("CpQCAgEAAA"));
    }

    #[test]
    fn test_parse_geocode_response_with_bounds() {
        let json = r#"{
            "results": [{
                "geometry": {
                    "location": {"lat": 35.6938, "lng": 139.7536},
                    "bounds": {
                        "northeast": {"lat": 35.7018, "lng": 139.7792},
                        "southwest": {"lat": 35.6708, "lng": 139.7292}
                    }
                },
                "formatted_address": "日本、東京都千代田区",
                "address_components": [{
                    "long_name": "千代田区",
                    "short_name": "千代田区",
                    "types": ["locality", "political"]
                }]
            }],
            "status": "OK"
        }"#;

        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        let result = &parsed.results[0];
        let bounds = result.geometry.bounds.unwrap();

        assert!(bounds.northeast.lat >= bounds.southwest.lat);
        assert!(bounds.northeast.lng >= bounds.southwest.lng);
        assert_eq!(result.address_components[0].long_name, "千代田区");
    }

    #[test]
    fn test_parse_geocode_response_without_bounds() {
        // Point matches omit bounds entirely
        let json = r#"{
            "results": [{
                "geometry": {"location": {"lat": 35.68, "lng": 139.76}},
                "formatted_address": "日本、東京都"
            }],
            "status": "OK"
        }"#;

        let parsed: GeocodeResponse = serde_json::from_str(json).unwrap();
        let result = &parsed.results[0];

        assert!(result.geometry.bounds.is_none());
        assert!(result.address_components.is_empty());

        let fallback = Bounds::point(result.geometry.location);
        assert_eq!(fallback.northeast, fallback.southwest);
    }

    #[test]
    fn test_check_status_mappings() {
        assert!(GoogleMapsClient::check_status("OK", None).is_ok());
        assert!(GoogleMapsClient::check_status("ZERO_RESULTS", None).is_ok());

        assert!(matches!(
            GoogleMapsClient::check_status("OVER_QUERY_LIMIT", None),
            Err(GourmetError::RateLimitExceeded)
        ));
        assert!(matches!(
            GoogleMapsClient::check_status("INVALID_REQUEST", None),
            Err(GourmetError::ExternalApi(_))
        ));
        assert!(matches!(
            GoogleMapsClient::check_status("UNKNOWN_ERROR", None),
            Err(GourmetError::ExternalApi(_))
        ));
    }
}
