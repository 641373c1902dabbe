use crate::errors::ProxyError;
use crate::utils::http_utils::API_KEY_HEADER;
use actix_web::HttpRequest;

/// Returns true when the `X-API-Key` header matches the configured protection key.
/// Nothing is accepted while no key is configured.
pub fn is_valid_api_key(req: &HttpRequest, expected: Option<&str>) -> bool {
    match (expected, req.headers().get(API_KEY_HEADER)) {
        (Some(expected), Some(api_key)) => api_key.as_bytes() == expected.as_bytes(),
        _ => false,
    }
}

pub fn validate_api_key(req: &HttpRequest, expected: Option<&str>) -> Result<(), ProxyError> {
    if is_valid_api_key(req, expected) {
        Ok(())
    } else {
        tracing::warn!(path = req.path(), "rejected request with invalid or missing API key");
        Err(ProxyError::Unauthorized)
    }
}
