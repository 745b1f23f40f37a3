//! Cache
//!
//! Este módulo contiene los caches en memoria de respuestas de TMDB.

pub mod cache_config;
pub mod movie_caches;
pub mod ttl_cache;

pub use cache_config::{CacheConfig, CacheSettings};
pub use movie_caches::MovieCaches;
pub use ttl_cache::TtlCache;
