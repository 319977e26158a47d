use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - check the datastore API key")]
    Unauthorized,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Datastore error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl StoreError {
    /// Truncate a response body to avoid logging excessive data.
    /// Cuts on a char boundary so multi-byte bodies never split mid-char.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => StoreError::Unauthorized,
            403 => StoreError::AccessDenied(truncated),
            404 => StoreError::NotFound(truncated),
            429 => StoreError::RateLimited,
            500..=599 => StoreError::ServerError(truncated),
            _ => StoreError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            StoreError::from_status(StatusCode::UNAUTHORIZED, ""),
            StoreError::Unauthorized
        ));
        assert!(matches!(
            StoreError::from_status(StatusCode::NOT_FOUND, "no row"),
            StoreError::NotFound(_)
        ));
        assert!(matches!(
            StoreError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            StoreError::RateLimited
        ));
        assert!(matches!(
            StoreError::from_status(StatusCode::BAD_GATEWAY, "upstream"),
            StoreError::ServerError(_)
        ));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // "é" is two bytes and straddles the 500-byte cutoff
        let body = format!("{}établissement indisponible", "x".repeat(499));
        let err = StoreError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = err.to_string();
        assert!(message.contains("truncated"));
        assert!(message.contains(&format!("{} total bytes", body.len())));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        let err = StoreError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = err.to_string();
        assert!(message.contains("truncated, 2000 total bytes"));
        assert!(message.len() < body.len());
    }
}
