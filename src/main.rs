// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, logging, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::GoogleMapsClient;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting gourmet-grid service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Shared Google Maps client (one HTTP connection pool for all requests)
    let maps_client = web::Data::new(GoogleMapsClient::new(config.google_maps_api_key.clone()));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (config and maps client)
            .app_data(config_data.clone())
            .app_data(maps_client.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
