use gloo_net::http::Request;

use crate::models::{Post, PostListResponse, PostPayload, PostResponse, PostStatus};
use crate::services::api::{api_url, network_error, read_empty, read_json, with_auth, ApiError};

/// Public listing: published posts only.
pub async fn get_posts(limit: u32, offset: u32) -> Result<PostListResponse, ApiError> {
    let url = api_url(&format!("/posts?limit={}&offset={}", limit, offset));
    let response = Request::get(&url).send().await.map_err(network_error)?;
    read_json(response).await
}

/// Public post detail.
pub async fn get_post(id: &str) -> Result<Post, ApiError> {
    let url = api_url(&format!("/posts/{}", id));
    let response = Request::get(&url).send().await.map_err(network_error)?;
    let post: PostResponse = read_json(response).await?;
    Ok(post.data)
}

/// The authenticated author's own posts. `published` narrows to published
/// posts regardless of the status filter (dashboard view).
pub async fn get_my_posts(
    limit: u32,
    offset: u32,
    status: Option<PostStatus>,
    published: Option<bool>,
) -> Result<PostListResponse, ApiError> {
    let mut url = format!("/posts/my?limit={}&offset={}", limit, offset);
    if let Some(status) = status {
        url.push_str(&format!("&status={}", status));
    }
    if let Some(published) = published {
        url.push_str(&format!("&published={}", published));
    }

    let response = with_auth(Request::get(&api_url(&url)))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// Admin listing filtered by status tab.
pub async fn get_admin_posts(
    status: PostStatus,
    limit: u32,
    offset: u32,
) -> Result<PostListResponse, ApiError> {
    let url = api_url(&format!(
        "/admin/posts?status={}&limit={}&offset={}",
        status, limit, offset
    ));
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

pub async fn create_post(payload: &PostPayload) -> Result<Post, ApiError> {
    let response = with_auth(Request::post(&api_url("/posts")))
        .json(payload)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let post: PostResponse = read_json(response).await?;
    log::info!("📝 Created post {}", post.data.id);
    Ok(post.data)
}

pub async fn update_post(id: &str, payload: &PostPayload) -> Result<Post, ApiError> {
    let response = with_auth(Request::put(&api_url(&format!("/posts/{}", id))))
        .json(payload)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let post: PostResponse = read_json(response).await?;
    log::info!("📝 Updated post {}", post.data.id);
    Ok(post.data)
}

pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&api_url(&format!("/posts/{}", id))))
        .send()
        .await
        .map_err(network_error)?;
    read_empty(response).await?;
    log::info!("🗑️ Deleted post {}", id);
    Ok(())
}
