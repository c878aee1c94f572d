// src/services/area_lookup.rs
// DOCUMENTATION: Best-effort area labeling via reverse geocoding
// PURPOSE: Attach a human-readable area name to each surviving place

use crate::models::{Category, PlaceInfo};
use crate::services::google_maps_client::{LatLng, MapsApi, NearbyPlace};

/// Sentinel area label when reverse geocoding fails or returns nothing
pub const AREA_UNKNOWN: &str = "地域不明";
/// Sentinel address when a nearby result carries no vicinity
pub const ADDRESS_UNKNOWN: &str = "住所不明";

/// Area lookup service
pub struct AreaLookup;

impl AreaLookup {
    /// Resolve a human-readable area label for a location.
    ///
    /// Prefers the first address component tagged as a sublocality, then the
    /// first comma-separated segment of the formatted address. Never fails;
    /// a degraded lookup returns the unknown-area sentinel.
    pub async fn area_name(client: &dyn MapsApi, location: LatLng) -> String {
        let results = match client.reverse_geocode(location).await {
            Ok(results) => results,
            Err(e) => {
                log::error!(
                    "Area lookup failed: ({}, {}) - {}",
                    location.lat,
                    location.lng,
                    e
                );
                return AREA_UNKNOWN.to_string();
            }
        };

        let first = match results.first() {
            Some(first) => first,
            None => return AREA_UNKNOWN.to_string(),
        };

        for component in &first.address_components {
            if component.types.iter().any(|t| t == "sublocality") {
                return component.long_name.clone();
            }
        }

        if let Some(address) = &first.formatted_address {
            if let Some(segment) = address.split(',').next() {
                return segment.to_string();
            }
        }

        AREA_UNKNOWN.to_string()
    }

    /// Convert the deduplicated places of one category into response
    /// entries, attaching the best-effort area label to each. A failed
    /// lookup degrades only that place's label.
    pub async fn convert_places(
        client: &dyn MapsApi,
        places: Vec<NearbyPlace>,
        category: Category,
    ) -> Vec<PlaceInfo> {
        log::info!("Converting {} entries for {}", places.len(), category.label());

        let mut converted = Vec::with_capacity(places.len());
        for place in places {
            let area = Self::area_name(client, place.geometry.location).await;
            converted.push(PlaceInfo {
                name: place.name,
                address: place
                    .vicinity
                    .unwrap_or_else(|| ADDRESS_UNKNOWN.to_string()),
                place_type: category.label().to_string(),
                area,
            });
        }

        converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_stubs::{nearby_place, reverse_result, StubMaps};

    const LOCATION: LatLng = LatLng {
        lat: 35.68,
        lng: 139.76,
    };

    #[tokio::test]
    async fn test_area_name_prefers_sublocality() {
        let stub = StubMaps {
            reverse_results: vec![reverse_result(
                Some("日本, 東京都千代田区丸の内1丁目"),
                vec![
                    ("東京都", vec!["administrative_area_level_1", "political"]),
                    ("丸の内", vec!["sublocality", "sublocality_level_2"]),
                ],
            )],
            ..StubMaps::default()
        };

        assert_eq!(AreaLookup::area_name(&stub, LOCATION).await, "丸の内");
    }

    #[tokio::test]
    async fn test_area_name_falls_back_to_formatted_address_segment() {
        let stub = StubMaps {
            reverse_results: vec![reverse_result(
                Some("1-1 Marunouchi, Chiyoda City, Tokyo"),
                vec![("東京都", vec!["administrative_area_level_1"])],
            )],
            ..StubMaps::default()
        };

        assert_eq!(
            AreaLookup::area_name(&stub, LOCATION).await,
            "1-1 Marunouchi"
        );
    }

    #[tokio::test]
    async fn test_area_name_degrades_to_sentinel() {
        let empty = StubMaps::default();
        assert_eq!(AreaLookup::area_name(&empty, LOCATION).await, AREA_UNKNOWN);

        let failing = StubMaps {
            fail_reverse: true,
            ..StubMaps::default()
        };
        assert_eq!(
            AreaLookup::area_name(&failing, LOCATION).await,
            AREA_UNKNOWN
        );
    }

    #[tokio::test]
    async fn test_convert_places_fills_address_sentinel() {
        let stub = StubMaps {
            fail_reverse: true,
            ..StubMaps::default()
        };

        let mut place = nearby_place("p1", "名無し食堂", 35.68, 139.76);
        place.vicinity = None;

        let converted =
            AreaLookup::convert_places(&stub, vec![place], Category::GeneralRestaurant).await;

        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].address, ADDRESS_UNKNOWN);
        assert_eq!(converted[0].area, AREA_UNKNOWN);
        assert_eq!(converted[0].place_type, Category::GeneralRestaurant.label());
    }
}
