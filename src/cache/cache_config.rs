//! Configuración de cache
//!
//! Este módulo contiene la configuración para los tres caches en memoria.

use std::time::Duration;

/// TTL por defecto de todos los caches
pub const DEFAULT_TTL: Duration = Duration::from_secs(600); // 10 minutos

/// Capacidad y TTL de un cache individual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub capacity: usize,
    pub ttl: Duration,
}

impl CacheSettings {
    pub const fn new(capacity: usize, ttl: Duration) -> Self {
        Self { capacity, ttl }
    }
}

/// Configuración de los caches por familia de endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub genres: CacheSettings,
    pub movies: CacheSettings,
    pub videos: CacheSettings,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            genres: CacheSettings::new(1, DEFAULT_TTL),
            movies: CacheSettings::new(100, DEFAULT_TTL),
            videos: CacheSettings::new(200, DEFAULT_TTL),
        }
    }
}

impl CacheConfig {
    /// Aplicar el mismo TTL a los tres caches, conservando las capacidades
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.genres.ttl = ttl;
        self.movies.ttl = ttl;
        self.videos.ttl = ttl;
        self
    }
}
