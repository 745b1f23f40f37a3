//! Servicio de catálogo de películas
//!
//! Cada operación sigue la misma secuencia: consultar el cache, en caso de
//! miss llamar a TMDB, guardar el resultado y devolverlo. El cache no se
//! bloquea durante la llamada a TMDB, así que dos requests simultáneos con la
//! misma clave pueden llamar ambos a TMDB.

use std::sync::Arc;

use serde_json::{json, Value};
use validator::Validate;

use crate::cache::MovieCaches;
use crate::clients::{QueryParams, TmdbClient};
use crate::dto::MovieQuery;
use crate::utils::errors::AppResult;

const GENRES_CACHE_KEY: &str = "genres";
const TRAILER_SITE: &str = "YouTube";

#[derive(Clone)]
pub struct MovieService {
    tmdb: TmdbClient,
    caches: Arc<MovieCaches>,
}

impl MovieService {
    pub fn new(tmdb: TmdbClient, caches: Arc<MovieCaches>) -> Self {
        Self { tmdb, caches }
    }

    /// Lista de géneros de TMDB
    pub async fn genres(&self) -> AppResult<Value> {
        if let Some(cached) = self.caches.genres.get(GENRES_CACHE_KEY).await {
            return Ok(cached);
        }

        let data = self
            .tmdb
            .get_json("genre/movie/list", Vec::new(), "Failed to fetch genres")
            .await?;

        self.caches.genres.insert(GENRES_CACHE_KEY, data.clone()).await;
        Ok(data)
    }

    /// Búsqueda o descubrimiento de películas según `q`
    pub async fn movies(&self, query: &MovieQuery) -> AppResult<Value> {
        query.validate()?;

        let cache_key = query.cache_key();
        if let Some(cached) = self.caches.movies.get(&cache_key).await {
            return Ok(cached);
        }

        let (endpoint, params) = movie_request(query);
        log::info!("🔍 Listado de películas vía {} (página {})", endpoint, query.page);

        let data = self
            .tmdb
            .get_json(endpoint, params, "Failed to fetch movies")
            .await?;

        self.caches.movies.insert(cache_key, data.clone()).await;
        Ok(data)
    }

    /// Videos de una película, solo los alojados en YouTube
    pub async fn movie_videos(&self, movie_id: i64) -> AppResult<Value> {
        let cache_key = format!("videos_{}", movie_id);
        if let Some(cached) = self.caches.videos.get(&cache_key).await {
            return Ok(cached);
        }

        let data = self
            .tmdb
            .get_json(&format!("movie/{}/videos", movie_id), Vec::new(), "Failed to fetch videos")
            .await?;

        let filtered = json!({ "results": youtube_videos(&data) });
        self.caches.videos.insert(cache_key, filtered.clone()).await;
        Ok(filtered)
    }
}

/// Endpoint y parámetros de TMDB para un listado
pub fn movie_request(query: &MovieQuery) -> (&'static str, QueryParams) {
    let mut params: QueryParams = vec![("page", query.page.to_string())];

    let endpoint = if query.is_search() {
        params.push(("query", query.q.clone()));
        "search/movie"
    } else {
        "discover/movie"
    };

    if let Some(genre) = query.genre_filter() {
        params.push(("with_genres", genre.to_string()));
    }

    params.push(("sort_by", query.sort_mode().sort_by().to_string()));
    (endpoint, params)
}

/// Conservar solo los videos cuyo `site` es YouTube, en el orden original
pub fn youtube_videos(data: &Value) -> Vec<Value> {
    data.get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .filter(|video| video.get("site").and_then(Value::as_str) == Some(TRAILER_SITE))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
