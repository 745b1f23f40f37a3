//! Handlers del catálogo de películas
//!
//! Traducen los parámetros HTTP a llamadas del `MovieService`.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;

use crate::dto::MovieQuery;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_movies_router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(get_genres))
        .route("/movies", get(get_movies))
        .route("/movies/:movie_id/videos", get(get_movie_videos))
}

/// GET /api/genres
async fn get_genres(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let data = state.movie_service.genres().await?;
    Ok(Json(data))
}

/// GET /api/movies?q=&genre=all&sort=popular&page=1
async fn get_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> AppResult<Json<Value>> {
    let data = state.movie_service.movies(&query).await?;
    Ok(Json(data))
}

/// GET /api/movies/:movie_id/videos
async fn get_movie_videos(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<Value>> {
    let data = state.movie_service.movie_videos(movie_id).await?;
    Ok(Json(data))
}
