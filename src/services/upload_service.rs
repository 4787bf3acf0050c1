use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::models::UploadResponse;
use crate::services::api::{api_url, network_error, read_json, with_auth, ApiError};

/// Upload a featured image; returns the public URL the backend assigned.
/// The browser sets the multipart boundary, so no explicit content type.
pub async fn upload_image(file: File) -> Result<String, ApiError> {
    let form = FormData::new()
        .map_err(|_| ApiError::Network("Failed to build form data".to_string()))?;
    form.append_with_blob_and_filename("image", &file, &file.name())
        .map_err(|_| ApiError::Network("Failed to attach image".to_string()))?;

    log::info!("🖼️ Uploading image: {}", file.name());

    let response = with_auth(Request::post(&api_url("/upload")))
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    let upload: UploadResponse = read_json(response).await?;
    Ok(upload.data.url)
}
