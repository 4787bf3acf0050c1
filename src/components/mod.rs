pub mod admin_layout;
pub mod admin_post_card;
pub mod all_posts_page;
pub mod app;
pub mod dashboard_page;
pub mod edit_post_page;
pub mod footer;
pub mod home_page;
pub mod login_page;
pub mod navbar;
pub mod new_post_page;
pub mod pagination;
pub mod post_card;
pub mod post_detail_page;
pub mod post_form;
pub mod public_layout;
pub mod register_page;
pub mod route_guard;
pub mod theme_toggle;

pub use admin_layout::AdminLayout;
pub use admin_post_card::AdminPostCard;
pub use all_posts_page::AllPostsPage;
pub use app::App;
pub use dashboard_page::DashboardPage;
pub use edit_post_page::EditPostPage;
pub use footer::Footer;
pub use home_page::HomePage;
pub use login_page::LoginPage;
pub use navbar::Navbar;
pub use new_post_page::NewPostPage;
pub use pagination::Pagination;
pub use post_card::PostCard;
pub use post_detail_page::PostDetailPage;
pub use post_form::PostForm;
pub use public_layout::PublicLayout;
pub use register_page::RegisterPage;
pub use route_guard::RouteGuard;
pub use theme_toggle::ThemeToggle;
