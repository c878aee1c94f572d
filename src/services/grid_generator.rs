// src/services/grid_generator.rs
// DOCUMENTATION: Geographic grid generation for area coverage
// PURPOSE: Tile a geocoded bounding box into nearby-search sample points

use crate::services::google_maps_client::{Bounds, LatLng};
use serde::{Deserialize, Serialize};

/// Grid spacing as fixed degree deltas, approximately 1 km per step.
/// The degree-to-distance ratio varies with latitude; treating it as a
/// constant is inherited behavior and must not be corrected here without
/// product sign-off.
const LAT_STEP_DEG: f64 = 0.009;
const LNG_STEP_DEG: f64 = 0.011;

/// One sample location within a search area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GridPoint {
    pub fn location(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Grid generator service
/// DOCUMENTATION: Produces systematic point coverage for a bounding box
pub struct GridGenerator;

impl GridGenerator {
    /// Tile a bounding box into grid points at fixed spacing.
    ///
    /// Steps per axis = ceil(span / step), clamped to at least one so a
    /// zero-area box (point geocode) yields a single point at that location.
    /// Points are anchored at the southwest corner and never placed outside
    /// the box. Grid size is unbounded; large areas produce large grids.
    pub fn generate_grid(bounds: &Bounds) -> Vec<GridPoint> {
        let lat_span = bounds.northeast.lat - bounds.southwest.lat;
        let lng_span = bounds.northeast.lng - bounds.southwest.lng;

        let lat_points = ((lat_span / LAT_STEP_DEG).ceil() as usize).max(1);
        let lng_points = ((lng_span / LNG_STEP_DEG).ceil() as usize).max(1);

        log::info!(
            "Grid size: {}x{} = {} points",
            lat_points,
            lng_points,
            lat_points * lng_points
        );

        let mut points = Vec::with_capacity(lat_points * lng_points);
        for i in 0..lat_points {
            for j in 0..lng_points {
                let lat = bounds.southwest.lat + i as f64 * LAT_STEP_DEG;
                let lng = bounds.southwest.lng + j as f64 * LNG_STEP_DEG;
                if lat <= bounds.northeast.lat && lng <= bounds.northeast.lng {
                    points.push(GridPoint { lat, lng });
                }
            }
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(sw: (f64, f64), ne: (f64, f64)) -> Bounds {
        Bounds {
            southwest: LatLng {
                lat: sw.0,
                lng: sw.1,
            },
            northeast: LatLng {
                lat: ne.0,
                lng: ne.1,
            },
        }
    }

    #[test]
    fn test_single_step_box_yields_southwest_corner() {
        let b = bounds((0.0, 0.0), (LAT_STEP_DEG, LNG_STEP_DEG));

        let points = GridGenerator::generate_grid(&b);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].lat, 0.0);
        assert_eq!(points[0].lng, 0.0);
    }

    #[test]
    fn test_zero_area_box_yields_single_point() {
        let b = bounds((35.6812, 139.7671), (35.6812, 139.7671));

        let points = GridGenerator::generate_grid(&b);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].lat, 35.6812);
        assert_eq!(points[0].lng, 139.7671);
    }

    #[test]
    fn test_all_points_stay_within_bounds() {
        let b = bounds((35.53, 139.56), (35.82, 139.92));

        let points = GridGenerator::generate_grid(&b);

        assert!(!points.is_empty());
        for point in &points {
            assert!(point.lat >= b.southwest.lat);
            assert!(point.lat <= b.northeast.lat);
            assert!(point.lng >= b.southwest.lng);
            assert!(point.lng <= b.northeast.lng);
        }
    }

    #[test]
    fn test_larger_box_produces_multiple_rows_and_columns() {
        // Roughly 3 x 3 km
        let b = bounds((35.0, 139.0), (35.0 + 3.0 * LAT_STEP_DEG, 139.0 + 3.0 * LNG_STEP_DEG));

        let points = GridGenerator::generate_grid(&b);

        let distinct_lats: std::collections::HashSet<u64> =
            points.iter().map(|p| p.lat.to_bits()).collect();
        let distinct_lngs: std::collections::HashSet<u64> =
            points.iter().map(|p| p.lng.to_bits()).collect();

        assert!(distinct_lats.len() >= 3);
        assert!(distinct_lngs.len() >= 3);
        assert_eq!(points.len(), distinct_lats.len() * distinct_lngs.len());
    }
}
