//! Hash-based routing. The route lives in `location.hash`, so a reload or
//! a shared link lands on the same screen without server support.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    PostDetail { id: String },
    Login,
    Register,
    Admin,
    AdminPosts,
    AdminPostNew,
    AdminPostEdit { id: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["posts", id] => Route::PostDetail { id: (*id).to_string() },
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin"] => Route::Admin,
            ["admin", "posts"] => Route::AdminPosts,
            ["admin", "posts", "new"] => Route::AdminPostNew,
            ["admin", "posts", "edit", id] => Route::AdminPostEdit { id: (*id).to_string() },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PostDetail { id } => format!("/posts/{}", id),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::AdminPosts => "/admin/posts".to_string(),
            Route::AdminPostNew => "/admin/posts/new".to_string(),
            Route::AdminPostEdit { id } => format!("/admin/posts/edit/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// True for the subtree that sits behind the route guard.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Admin | Route::AdminPosts | Route::AdminPostNew | Route::AdminPostEdit { .. }
        )
    }

    pub fn current() -> Route {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Route::parse(&hash)
    }
}

/// Push navigation: adds a history entry and fires `hashchange`.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.path());
    }
}

/// Replace navigation: used by redirects so Back does not bounce the user
/// straight into the guard again.
pub fn replace(route: &Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(&format!("#{}", route.path()));
    }
}

/// Current route, re-rendering on every `hashchange`.
#[hook]
pub fn use_route() -> Route {
    let route = use_state(Route::current);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(
                move |_: web_sys::HashChangeEvent| {
                    route.set(Route::current());
                },
            );

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "hashchange",
                    listener.as_ref().unchecked_ref(),
                );
            }

            // The listener must outlive the effect; dropping it here would
            // detach the router. Cleanup removes it on unmount.
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    (*route).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route() {
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("#/posts/abc-123"),
            Route::PostDetail { id: "abc-123".to_string() }
        );
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/register"), Route::Register);
        assert_eq!(Route::parse("#/admin"), Route::Admin);
        assert_eq!(Route::parse("#/admin/posts"), Route::AdminPosts);
        assert_eq!(Route::parse("#/admin/posts/new"), Route::AdminPostNew);
        assert_eq!(
            Route::parse("#/admin/posts/edit/xyz"),
            Route::AdminPostEdit { id: "xyz".to_string() }
        );
    }

    #[test]
    fn unknown_paths_map_to_not_found() {
        assert_eq!(Route::parse("#/nope"), Route::NotFound);
        assert_eq!(Route::parse("#/admin/nope"), Route::NotFound);
        assert_eq!(Route::parse("#/posts/a/b/c"), Route::NotFound);
    }

    #[test]
    fn parse_and_path_round_trip() {
        let routes = [
            Route::Home,
            Route::PostDetail { id: "id-1".to_string() },
            Route::Login,
            Route::Register,
            Route::Admin,
            Route::AdminPosts,
            Route::AdminPostNew,
            Route::AdminPostEdit { id: "id-2".to_string() },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn only_the_admin_subtree_requires_auth() {
        assert!(Route::Admin.requires_auth());
        assert!(Route::AdminPostEdit { id: "x".to_string() }.requires_auth());
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::PostDetail { id: "x".to_string() }.requires_auth());
    }
}
