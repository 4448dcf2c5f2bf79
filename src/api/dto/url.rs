//! DTOs for the URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenUrlRequest {
    /// The original URL to shorten. Scheme and length are checked by the service.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A short id together with the URL it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub id: String,
    pub url: String,
}

impl UrlResponse {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shorten_request_valid() {
        let request: ShortenUrlRequest =
            serde_json::from_value(json!({ "url": "https://encore.dev" })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_shorten_request_invalid_url() {
        let request: ShortenUrlRequest =
            serde_json::from_value(json!({ "url": "not-a-url" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_url_response_shape() {
        let body = serde_json::to_value(UrlResponse::new("5cJpBVRp", "https://encore.dev")).unwrap();
        assert_eq!(body, json!({ "id": "5cJpBVRp", "url": "https://encore.dev" }));
    }
}
