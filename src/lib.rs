//! MovieStream backend
//!
//! Proxy con cache hacia la API de TMDB que además sirve el frontend estático.

pub mod api;
pub mod cache;
pub mod clients;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod services;
pub mod state;
pub mod utils;

pub use api::create_app;
pub use config::EnvironmentConfig;
pub use state::AppState;
