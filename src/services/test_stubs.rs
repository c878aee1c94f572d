// src/services/test_stubs.rs
// DOCUMENTATION: Scripted MapsApi implementation shared by pipeline tests

use crate::errors::GourmetError;
use crate::services::google_maps_client::{
    AddressComponent, Bounds, GeocodeGeometry, GeocodeResult, LatLng, MapsApi, NearbyPage,
    NearbyPlace, PlaceGeometry,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

/// Scripted maps backend: geocode results are fixed, first pages are keyed
/// by search keyword, continuation pages by token. Failure switches force
/// the error paths the pipeline must survive.
#[derive(Default)]
pub struct StubMaps {
    pub geocode_results: Vec<GeocodeResult>,
    pub first_pages: HashMap<&'static str, NearbyPage>,
    pub continuation_pages: HashMap<&'static str, NearbyPage>,
    pub reverse_results: Vec<GeocodeResult>,
    pub fail_initial: bool,
    pub fail_continuations: bool,
    pub fail_reverse: bool,
    pub continuation_calls: AtomicU32,
    pub reverse_calls: AtomicU32,
}

#[async_trait]
impl MapsApi for StubMaps {
    async fn geocode(&self, _address: &str) -> Result<Vec<GeocodeResult>, GourmetError> {
        Ok(self.geocode_results.clone())
    }

    async fn nearby_search(
        &self,
        _location: LatLng,
        _radius: u32,
        keyword: &str,
        _place_type: &str,
    ) -> Result<NearbyPage, GourmetError> {
        if self.fail_initial {
            return Err(GourmetError::ExternalApi("search unavailable".to_string()));
        }
        Ok(self.first_pages.get(keyword).cloned().unwrap_or_default())
    }

    async fn nearby_search_page(&self, page_token: &str) -> Result<NearbyPage, GourmetError> {
        self.continuation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_continuations {
            return Err(GourmetError::ExternalApi(
                "page token not ready".to_string(),
            ));
        }
        Ok(self
            .continuation_pages
            .get(page_token)
            .cloned()
            .unwrap_or_default())
    }

    async fn reverse_geocode(
        &self,
        _location: LatLng,
    ) -> Result<Vec<GeocodeResult>, GourmetError> {
        self.reverse_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reverse {
            return Err(GourmetError::ExternalApi(
                "reverse geocode unavailable".to_string(),
            ));
        }
        Ok(self.reverse_results.clone())
    }
}

pub fn nearby_place(place_id: &str, name: &str, lat: f64, lng: f64) -> NearbyPlace {
    NearbyPlace {
        place_id: place_id.to_string(),
        name: name.to_string(),
        vicinity: Some(format!("{}周辺", name)),
        geometry: PlaceGeometry {
            location: LatLng { lat, lng },
        },
    }
}

pub fn page(places: Vec<NearbyPlace>, next_page_token: Option<&str>) -> NearbyPage {
    NearbyPage {
        places,
        next_page_token: next_page_token.map(|t| t.to_string()),
    }
}

pub fn geocode_result(location: LatLng, bounds: Option<Bounds>) -> GeocodeResult {
    GeocodeResult {
        geometry: GeocodeGeometry { location, bounds },
        formatted_address: None,
        address_components: Vec::new(),
    }
}

pub fn reverse_result(
    formatted_address: Option<&str>,
    components: Vec<(&str, Vec<&str>)>,
) -> GeocodeResult {
    GeocodeResult {
        geometry: GeocodeGeometry {
            location: LatLng { lat: 0.0, lng: 0.0 },
            bounds: None,
        },
        formatted_address: formatted_address.map(|a| a.to_string()),
        address_components: components
            .into_iter()
            .map(|(long_name, types)| AddressComponent {
                long_name: long_name.to_string(),
                short_name: long_name.to_string(),
                types: types.into_iter().map(|t| t.to_string()).collect(),
            })
            .collect(),
    }
}
