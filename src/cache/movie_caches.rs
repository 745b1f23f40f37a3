//! Caches por familia de endpoint
//!
//! Géneros, listados de películas y videos por película: tres caches
//! independientes, sin invariantes entre ellos.

use super::cache_config::CacheConfig;
use super::ttl_cache::TtlCache;

pub struct MovieCaches {
    pub genres: TtlCache,
    pub movies: TtlCache,
    pub videos: TtlCache,
}

impl MovieCaches {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            genres: TtlCache::new("genres", config.genres),
            movies: TtlCache::new("movies", config.movies),
            videos: TtlCache::new("videos", config.videos),
        }
    }

    /// Limpiar los tres caches
    pub async fn clear(&self) {
        self.genres.clear().await;
        self.movies.clear().await;
        self.videos.clear().await;
    }
}

impl Default for MovieCaches {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
