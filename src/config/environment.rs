//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! La única variable obligatoria es `TMDB_API_KEY`; sin ella el servidor no arranca.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::utils::errors::{config_error, AppResult};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub frontend_dir: PathBuf,
    pub cache: CacheConfig,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Cargar la configuración usando una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tmdb_api_key = lookup("TMDB_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| config_error("TMDB_API_KEY must be set"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| config_error("PORT must be a valid number"))?,
            None => 8000,
        };

        let mut cache = CacheConfig::default();
        if let Some(raw) = lookup("CACHE_TTL_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| config_error("CACHE_TTL_SECS must be a valid number"))?;
            cache = cache.with_ttl(Duration::from_secs(secs));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            tmdb_api_key,
            tmdb_base_url: lookup("TMDB_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            frontend_dir: lookup("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("frontend")),
            cache,
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "8000")]));
        assert!(matches!(result, Err(crate::utils::errors::AppError::Config(_))));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("TMDB_API_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("TMDB_API_KEY", "secret")]))
            .expect("config should load");
        assert_eq!(config.tmdb_api_key, "secret");
        assert_eq!(config.tmdb_base_url, DEFAULT_TMDB_BASE_URL);
        assert_eq!(config.server_url(), "0.0.0.0:8000");
        assert_eq!(config.frontend_dir, PathBuf::from("frontend"));
        assert_eq!(config.cache.movies.ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_overrides() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("TMDB_API_KEY", "secret"),
            ("PORT", "9090"),
            ("CACHE_TTL_SECS", "30"),
            ("TMDB_BASE_URL", "http://127.0.0.1:4000"),
        ]))
        .expect("config should load");
        assert_eq!(config.port, 9090);
        assert_eq!(config.tmdb_base_url, "http://127.0.0.1:4000");
        assert_eq!(config.cache.genres.ttl, Duration::from_secs(30));
        assert_eq!(config.cache.videos.ttl, Duration::from_secs(30));
        assert_eq!(config.cache.videos.capacity, 200);
    }

    #[test]
    fn test_invalid_port() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[
            ("TMDB_API_KEY", "secret"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
