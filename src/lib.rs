pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::Config;
use handlers::{cars, health, AppState};
use repository::CarRepository;

/// Build the full application router around `repository`.
pub fn create_app(config: Config, repository: CarRepository) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/cars", cars::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(config, repository))
}
