pub mod api;
pub mod auth_service;
pub mod post_service;
pub mod upload_service;

pub use api::ApiError;
pub use auth_service::{login, register};
pub use post_service::{
    create_post, delete_post, get_admin_posts, get_my_posts, get_post, get_posts, update_post,
};
pub use upload_service::upload_image;
