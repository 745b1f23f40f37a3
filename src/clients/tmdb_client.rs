//! Cliente HTTP para TMDB
//!
//! Construye las URLs de TMDB inyectando la API key y ejecuta las llamadas
//! GET. Cualquier status distinto de 200 se devuelve como error de upstream
//! con el mismo código; no hay reintentos ni timeout.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::utils::errors::{upstream_error, AppError, AppResult};

/// Parámetros de query enviados a TMDB, en orden
pub type QueryParams = Vec<(&'static str, String)>;

/// Cliente HTTP para TMDB
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Construir la URL completa de un endpoint y agregar la API key a los parámetros
    pub fn build_url(&self, endpoint: &str, mut params: QueryParams) -> (String, QueryParams) {
        params.push(("api_key", self.api_key.clone()));
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        (url, params)
    }

    /// GET a un endpoint de TMDB y parsear el cuerpo JSON
    ///
    /// `detail` es el mensaje genérico que recibe el cliente si TMDB falla.
    pub async fn get_json(&self, endpoint: &str, params: QueryParams, detail: &str) -> AppResult<Value> {
        let (url, params) = self.build_url(endpoint, params);
        log::info!("🎬 GET TMDB {}", url);

        let response = self.client.get(&url).query(&params).send().await.map_err(|e| {
            let e = e.without_url();
            log::error!("❌ No se pudo contactar TMDB {}: {}", endpoint, e);
            AppError::from(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("❌ TMDB {} respondió con status {}", endpoint, status);
            return Err(upstream_error(status, detail));
        }

        response.json::<Value>().await.map_err(|e| {
            let e = e.without_url();
            log::error!("❌ Respuesta inválida de TMDB {}: {}", endpoint, e);
            AppError::ExternalApi(format!("Invalid JSON from {}: {}", endpoint, e))
        })
    }
}
