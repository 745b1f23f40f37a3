//! API endpoints
//!
//! Este módulo contiene los endpoints de la API y el router completo de la
//! aplicación (API + frontend estático).

pub mod health;
pub mod movies;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(movies::create_movies_router())
        .merge(health::create_health_router())
}

/// Crear la aplicación completa: `/api`, `/static` y la página de inicio
pub fn create_app(state: AppState) -> Router {
    let frontend_dir = state.config.frontend_dir.clone();

    Router::new()
        .nest("/api", create_api_router())
        .nest_service("/static", ServeDir::new(&frontend_dir))
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
