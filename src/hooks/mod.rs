pub mod use_post_list;
pub mod use_session;
pub mod use_theme;

pub use use_post_list::{use_post_list, PostQuery, UsePostListHandle};
pub use use_session::{use_session, use_session_provider, UseSessionHandle};
pub use use_theme::{use_theme, UseThemeHandle};
