use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login wraps its payload one level deep: `{"data": {"token": "..."}}`.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub data: TokenPayload,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenPayload {
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct User {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UserResponse {
    pub data: User,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UploadResponse {
    pub data: UploadPayload,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UploadPayload {
    pub url: String,
}
