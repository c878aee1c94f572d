// src/handlers/places.rs
// DOCUMENTATION: HTTP handler for the area gourmet search
// PURPOSE: Parse the request, run the search pipeline, return the response

use crate::config::Config;
use crate::errors::GourmetError;
use crate::models::LocationRequest;
use crate::services::{GoogleMapsClient, SearchService};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// POST /get_place_info
/// Search every gourmet category across the requested area
pub async fn get_place_info(
    config: web::Data<Config>,
    client: web::Data<GoogleMapsClient>,
    req: web::Json<LocationRequest>,
) -> Result<impl Responder, GourmetError> {
    // Validate request
    if let Err(e) = req.validate() {
        return Err(GourmetError::ValidationError(e.to_string()));
    }

    let req = req.into_inner();
    let response = SearchService::search_area(
        client.get_ref(),
        &req.prefecture,
        &req.city,
        config.search_radius_m,
    )
    .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configuration for search routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/get_place_info", web::post().to(get_place_info));
}
