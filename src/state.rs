//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los caches viven tanto como el estado:
//! se crean al arrancar y se liberan al apagar el servidor.

use std::sync::Arc;

use reqwest::Client;

use crate::cache::MovieCaches;
use crate::clients::TmdbClient;
use crate::config::environment::EnvironmentConfig;
use crate::services::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub caches: Arc<MovieCaches>,
    pub movie_service: MovieService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Crear el estado con un cliente HTTP ya construido
    pub fn with_client(config: EnvironmentConfig, http_client: Client) -> Self {
        let caches = Arc::new(MovieCaches::new(&config.cache));
        let tmdb = TmdbClient::new(http_client, config.tmdb_base_url.clone(), config.tmdb_api_key.clone());

        Self {
            movie_service: MovieService::new(tmdb, caches.clone()),
            caches,
            config,
        }
    }
}
