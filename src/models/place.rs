// src/models/place.rs
// DOCUMENTATION: Request/response data structures
// PURPOSE: Defines the serialization models for the search endpoint

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Category;

/// One gourmet spot in the response
/// DOCUMENTATION: Derived from a nearby-search result plus the area lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceInfo {
    /// Place name as reported upstream
    pub name: String,

    /// Coarse street address (vicinity), or the unknown-address sentinel
    pub address: String,

    /// Display label of the category that kept this place
    pub place_type: String,

    /// Human-readable area label from reverse geocoding
    pub area: String,
}

/// Request DTO for the search endpoint
/// DOCUMENTATION: Administrative area qualifiers, concatenated into the
/// geocoding query (Japanese address convention: prefecture then city)
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct LocationRequest {
    /// Prefecture name (e.g., 東京都)
    #[validate(length(min = 1, max = 64))]
    pub prefecture: String,

    /// City or ward name (e.g., 千代田区)
    #[validate(length(min = 1, max = 64))]
    pub city: String,
}

/// Response DTO for the search endpoint
/// DOCUMENTATION: Six category lists in dedup priority order, plus the
/// distinct-place count and wall-clock duration of the whole operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Distinct places across all six lists
    pub total_restaurants: usize,
    pub general_restaurants: Vec<PlaceInfo>,
    pub izakaya: Vec<PlaceInfo>,
    pub family_restaurants: Vec<PlaceInfo>,
    pub ramen_shops: Vec<PlaceInfo>,
    pub soba_udon_shops: Vec<PlaceInfo>,
    pub cafes: Vec<PlaceInfo>,
    /// Wall-clock processing time in seconds
    pub processing_time: f64,
}

impl LocationResponse {
    /// Empty response shell, filled in by the assembler
    pub fn new(total_restaurants: usize) -> Self {
        Self {
            total_restaurants,
            general_restaurants: Vec::new(),
            izakaya: Vec::new(),
            family_restaurants: Vec::new(),
            ramen_shops: Vec::new(),
            soba_udon_shops: Vec::new(),
            cafes: Vec::new(),
            processing_time: 0.0,
        }
    }

    /// Response list backing a given category
    pub fn list_mut(&mut self, category: Category) -> &mut Vec<PlaceInfo> {
        match category {
            Category::GeneralRestaurant => &mut self.general_restaurants,
            Category::Izakaya => &mut self.izakaya,
            Category::FamilyRestaurant => &mut self.family_restaurants,
            Category::Ramen => &mut self.ramen_shops,
            Category::SobaUdon => &mut self.soba_udon_shops,
            Category::Cafe => &mut self.cafes,
        }
    }

    /// Sum of the six list lengths (equals total_restaurants after dedup)
    pub fn listed_count(&self) -> usize {
        self.general_restaurants.len()
            + self.izakaya.len()
            + self.family_restaurants.len()
            + self.ramen_shops.len()
            + self.soba_udon_shops.len()
            + self.cafes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_request_rejects_empty_fields() {
        let req = LocationRequest {
            prefecture: String::new(),
            city: "千代田区".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LocationRequest {
            prefecture: "東京都".to_string(),
            city: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_location_request_accepts_valid_input() {
        let req = LocationRequest {
            prefecture: "東京都".to_string(),
            city: "千代田区".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_list_mut_routes_to_matching_list() {
        let mut response = LocationResponse::new(0);
        let entry = PlaceInfo {
            name: "店".to_string(),
            address: "住所".to_string(),
            place_type: Category::Ramen.label().to_string(),
            area: "地域".to_string(),
        };

        response.list_mut(Category::Ramen).push(entry);

        assert_eq!(response.ramen_shops.len(), 1);
        assert_eq!(response.listed_count(), 1);
    }
}
