//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// TMDB respondió con un status distinto de 200
    #[error("Upstream error {status}: {detail}")]
    Upstream { status: StatusCode, detail: String },

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        // La URL de la request lleva la API key en la query
        AppError::ExternalApi(e.without_url().to_string())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Config(msg) => {
                log::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Configuration Error".to_string(),
                        message: "The server is not configured correctly".to_string(),
                        details: None,
                        code: Some("CONFIG_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                log::warn!("Validation error: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Upstream { status, detail } => {
                log::warn!("Upstream error {}: {}", status, detail);
                (
                    status,
                    ErrorResponse {
                        error: "Upstream Error".to_string(),
                        message: detail,
                        details: Some(json!({ "upstream_status": status.as_u16() })),
                        code: Some("UPSTREAM_ERROR".to_string()),
                    },
                )
            }

            AppError::ExternalApi(msg) => {
                log::error!("External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: "An error occurred while communicating with external service".to_string(),
                        details: None,
                        code: Some("EXTERNAL_API_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de TMDB a partir del status recibido
pub fn upstream_error(status: StatusCode, detail: &str) -> AppError {
    AppError::Upstream {
        status,
        detail: detail.to_string(),
    }
}

/// Función helper para crear errores de configuración
pub fn config_error(message: &str) -> AppError {
    AppError::Config(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_keeps_status() {
        let response = upstream_error(StatusCode::NOT_FOUND, "Failed to fetch videos").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = upstream_error(StatusCode::UNAUTHORIZED, "Failed to fetch genres").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_external_api_error_hides_cause() {
        let response = AppError::ExternalApi("api_key=secret".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = String::from_utf8_lossy(&bytes);
        assert!(!body.contains("secret"));
        assert!(body.contains("EXTERNAL_API_ERROR"));
    }

    #[test]
    fn test_external_api_error_is_bad_gateway() {
        let response = AppError::ExternalApi("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
