//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod tmdb_client;

pub use tmdb_client::{QueryParams, TmdbClient};
