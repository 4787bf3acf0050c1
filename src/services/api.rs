//! HTTP plumbing shared by every service: base URL, bearer attachment and
//! error normalization. Stateless; the token is read from persisted
//! storage at send time.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::utils::constants::BACKEND_URL;
use crate::utils::storage::load_token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response at all (offline, DNS, CORS).
    #[error("Network error: {0}")]
    Network(String),
    /// 401 on any request. The caller is expected to expire the session.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,
    #[error("Not found.")]
    NotFound,
    /// 4xx with a server-supplied message (validation, bad credentials).
    #[error("{0}")]
    Rejected(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}

/// Attach `Authorization: Bearer <token>` when a token is persisted.
/// Requests without a token go out unauthenticated.
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Decode a successful response, or normalize the failure.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// For endpoints with an empty success body (DELETE).
pub async fn read_empty(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

pub async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = body_message(response).await;
    classify_status(status, message)
}

/// For credential endpoints: a 401 there means the credentials were
/// wrong, not that a session expired, so it keeps the server's message
/// instead of the expiry wording.
pub async fn credential_error(response: Response) -> ApiError {
    let status = response.status();
    let message = body_message(response).await;
    classify_credential_status(status, message)
}

async fn body_message(response: Response) -> Option<String> {
    response
        .text()
        .await
        .ok()
        .and_then(|body| extract_message(&body))
}

fn classify_status(status: u16, message: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        400..=499 => {
            ApiError::Rejected(message.unwrap_or_else(|| format!("Request failed (HTTP {})", status)))
        }
        _ => ApiError::Server(message.unwrap_or_else(|| format!("HTTP {}", status))),
    }
}

fn classify_credential_status(status: u16, message: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Rejected(message.unwrap_or_else(|| "Login failed.".to_string())),
        _ => classify_status(status, message),
    }
}

/// Pull the human-readable message out of an error body. The backend uses
/// either `{"error": "..."}` or `{"message": "..."}`.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "message"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field_first() {
        assert_eq!(
            extract_message(r#"{"error": "title is required"}"#),
            Some("title is required".to_string())
        );
        assert_eq!(
            extract_message(r#"{"message": "invalid credentials"}"#),
            Some("invalid credentials".to_string())
        );
        assert_eq!(
            extract_message(r#"{"error": "first", "message": "second"}"#),
            Some("first".to_string())
        );
    }

    #[test]
    fn malformed_or_empty_bodies_yield_no_message() {
        assert_eq!(extract_message("not json"), None);
        assert_eq!(extract_message(r#"{"error": ""}"#), None);
        assert_eq!(extract_message(r#"{"code": 42}"#), None);
    }

    #[test]
    fn a_401_means_expired_session_on_authenticated_calls() {
        assert_eq!(
            classify_status(401, Some("invalid credentials".to_string())),
            ApiError::Unauthorized
        );
        assert_eq!(classify_status(404, None), ApiError::NotFound);
        assert!(matches!(classify_status(500, None), ApiError::Server(_)));
    }

    #[test]
    fn a_401_at_login_keeps_the_server_message() {
        let err = classify_credential_status(401, Some("invalid credentials".to_string()));
        assert_eq!(err, ApiError::Rejected("invalid credentials".to_string()));
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn a_401_at_login_with_no_body_falls_back_to_login_failed() {
        assert_eq!(
            classify_credential_status(401, None).to_string(),
            "Login failed."
        );
        // Other statuses keep the normal classification.
        assert!(matches!(
            classify_credential_status(422, Some("email taken".to_string())),
            ApiError::Rejected(_)
        ));
        assert!(matches!(
            classify_credential_status(503, None),
            ApiError::Server(_)
        ));
    }

    #[test]
    fn api_error_messages_are_presentable() {
        assert_eq!(
            ApiError::Rejected("invalid credentials".into()).to_string(),
            "invalid credentials"
        );
        assert!(ApiError::Network("timeout".into())
            .to_string()
            .starts_with("Network error"));
    }
}
