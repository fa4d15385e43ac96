use thiserror::Error;

/// Failure categories for a single backend call.
///
/// The backend signals valid absence of data (null `request_id`, empty lists)
/// inside successful responses; those are not errors. `NotFound` covers a 404
/// status, which during readiness polling means "not generated yet".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("not authenticated")]
    Unauthenticated,

    #[error("not found")]
    NotFound,

    #[error("server rejected request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("could not decode response: {0}")]
    InvalidResponse(String),

    #[error("token store error: {0}")]
    TokenStore(String),
}

impl ApiError {
    /// The message to show the user: the server's `detail` field when one was
    /// returned, otherwise the fallback supplied by the caller.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Api {
                detail: Some(detail),
                ..
            } => detail,
            _ => fallback,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Terminal outcomes of the recommendation loading sequence.
/// Each maps to a distinct user-facing message with a retry control.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no analysis request on record")]
    NoRequestFound,

    #[error("no hair recommendations for the latest request")]
    NoRecommendations,

    #[error(transparent)]
    Network(ApiError),
}

/// Failures of the session accessor (sign-in, sign-up, profile, logout).
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input rejected before any request was issued.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("login succeeded but no token was returned")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Api {
            status: 400,
            detail: Some("email already registered".to_string()),
        };
        assert_eq!(err.user_message("sign-up failed"), "email already registered");
    }

    #[test]
    fn test_user_message_falls_back_without_detail() {
        let err = ApiError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("sign-up failed"), "sign-up failed");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("sign-up failed"), "sign-up failed");
    }
}
