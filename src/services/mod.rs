//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios combinan el cliente de TMDB con los caches en memoria.

pub mod movie_service;

pub use movie_service::*;
