use crate::types::token::ErrorResponse;
use crate::utils::http_utils::with_cors;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Errors surfaced by the proxy, either to the client or to the pagination loop.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Unauthorized. Invalid or missing API key.")]
    Unauthorized,
    #[error("Address parameter is required")]
    MissingAddress,
    #[error("THIRDWEB_CLIENT_ID is not configured")]
    MissingClientId,
    #[error("Invalid endpoint")]
    InvalidEndpoint(String),
    #[error("Thirdweb API error: {status} - {body}")]
    Upstream { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ProxyError {
    /// Diagnostic detail attached to the JSON error envelope.
    pub fn details(&self) -> Option<String> {
        match self {
            ProxyError::Unauthorized => None,
            other => Some(format!("{:?}", other)),
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        with_cors(&mut builder).json(ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        })
    }
}
