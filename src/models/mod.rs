pub mod auth;
pub mod post;

pub use auth::{
    LoginRequest, LoginResponse, RegisterRequest, UploadResponse, User, UserResponse,
};
pub use post::{Author, ListMeta, Post, PostListResponse, PostPayload, PostResponse, PostStatus, Tag};
