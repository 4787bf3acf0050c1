/// Base URL of the backend API.
/// Configured at compile time:
/// - Development: http://localhost:3000/api (default)
/// - Production: via the BACKEND_URL env var (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// localStorage key holding the bearer token.
pub const STORAGE_KEY_TOKEN: &str = "storia_token";

/// localStorage key holding the theme preference ("light" / "dark").
/// Unrelated to the session; never sent to the server.
pub const STORAGE_KEY_THEME: &str = "storia_theme";

/// Posts per page on the public home listing.
pub const HOME_PAGE_SIZE: u32 = 9;

/// Posts per page on the admin dashboard.
pub const DASHBOARD_PAGE_SIZE: u32 = 3;

/// Posts per page on the admin "All Posts" tabs.
pub const ADMIN_PAGE_SIZE: u32 = 10;
