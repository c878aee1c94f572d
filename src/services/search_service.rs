// src/services/search_service.rs
// DOCUMENTATION: Area gourmet search orchestration
// PURPOSE: Run the full pipeline: geocode, grid, fan-out, dedup, enrich,
// assemble

use crate::errors::GourmetError;
use crate::models::LocationResponse;
use crate::services::area_lookup::AreaLookup;
use crate::services::google_maps_client::{Bounds, MapsApi};
use crate::services::grid_generator::GridGenerator;
use crate::services::place_search::{dedup_by_place_id, PlaceSearcher};
use std::time::Instant;

/// Search service
/// DOCUMENTATION: Stateless orchestrator; all state is request-scoped
pub struct SearchService;

impl SearchService {
    /// Run the whole pipeline for one administrative area.
    ///
    /// The address is the prefecture and city concatenated (Japanese address
    /// convention). An unresolvable address is the only failure surfaced to
    /// the caller; every later stage degrades to partial data instead.
    pub async fn search_area(
        client: &dyn MapsApi,
        prefecture: &str,
        city: &str,
        radius: u32,
    ) -> Result<LocationResponse, GourmetError> {
        let started = Instant::now();
        let address = format!("{}{}", prefecture, city);
        log::info!("Search started: {}", address);

        let geocoded = client.geocode(&address).await?;
        let first = geocoded
            .first()
            .ok_or_else(|| GourmetError::AddressNotFound(address.clone()))?;

        // Point matches carry no bounds; search a zero-area box at the match
        let bounds = first
            .geometry
            .bounds
            .unwrap_or_else(|| Bounds::point(first.geometry.location));

        let grid_points = GridGenerator::generate_grid(&bounds);
        log::info!("Search points: {}", grid_points.len());

        let buckets = PlaceSearcher::search_grid(client, &grid_points, radius).await;

        log::info!("Deduplicating results");
        let (kept, total) = dedup_by_place_id(buckets);

        let mut response = LocationResponse::new(total);
        for (category, places) in kept {
            let converted = AreaLookup::convert_places(client, places, category).await;
            *response.list_mut(category) = converted;
        }

        // Dedup guarantees one appearance per place across all six lists
        debug_assert_eq!(response.total_restaurants, response.listed_count());

        response.processing_time = started.elapsed().as_secs_f64();
        log::info!(
            "Search completed: {} distinct places in {:.2}s",
            response.total_restaurants,
            response.processing_time
        );

        Ok(response)
    }
}
