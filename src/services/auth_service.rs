use gloo_net::http::Request;

use crate::models::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse};
use crate::services::api::{api_url, credential_error, network_error, read_json, ApiError};

/// Exchange credentials for a bearer token. A 401 here is bad
/// credentials, not an expired session, so the error goes through
/// `credential_error` and keeps the server's message.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&api_url("/login"))
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(credential_error(response).await);
    }
    let login: LoginResponse = read_json(response).await?;
    log::info!("✅ Login succeeded for {}", email);
    Ok(login.data.token)
}

/// Create a new author account. The caller logs in afterwards.
pub async fn register(full_name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    let body = RegisterRequest {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&api_url("/register"))
        .json(&body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    let user: UserResponse = read_json(response).await?;
    log::info!("✅ Registered {}", user.data.email);
    Ok(user.data)
}
