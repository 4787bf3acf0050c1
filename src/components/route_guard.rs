use yew::prelude::*;

use crate::hooks::use_session;
use crate::router::{self, Route};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum GuardState {
    /// Session restore in progress. Resolves on the first effect tick,
    /// since restore reads storage synchronously.
    Checking,
    Authorized,
    Unauthorized,
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Gates the admin subtree on the session: renders children when
/// authenticated, otherwise redirects to the login route (replace-style,
/// so Back does not loop through the guard).
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session();
    let state = use_state(|| GuardState::Checking);

    {
        let state = state.clone();
        use_effect_with(session.is_authenticated(), move |authenticated| {
            if *authenticated {
                state.set(GuardState::Authorized);
            } else {
                state.set(GuardState::Unauthorized);
                router::replace(&Route::Login);
            }
            || ()
        });
    }

    match *state {
        GuardState::Checking => html! { <div class="guard-loading">{"Loading..."}</div> },
        GuardState::Authorized => html! { <>{ props.children.clone() }</> },
        GuardState::Unauthorized => html! {},
    }
}

// Runs under `wasm-pack test --headless`; mounting needs a real DOM.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::time::Duration;

    use wasm_bindgen_test::*;
    use yew::prelude::*;

    use super::RouteGuard;
    use crate::hooks::{use_session_provider, UseSessionHandle};
    use crate::utils::storage::{clear_token, save_token};

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(Harness)]
    fn harness() -> Html {
        let session = use_session_provider();
        html! {
            <ContextProvider<UseSessionHandle> context={session}>
                <RouteGuard>
                    <span id="guarded">{"guarded content"}</span>
                </RouteGuard>
            </ContextProvider<UseSessionHandle>>
        }
    }

    async fn mount() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<Harness>::with_root(root.clone()).render();
        // Let the first render and the guard effect settle.
        yew::platform::time::sleep(Duration::from_millis(50)).await;
        root
    }

    #[wasm_bindgen_test]
    async fn renders_children_when_a_token_is_persisted() {
        save_token("a.valid.token").unwrap();
        let window = web_sys::window().unwrap();
        let _ = window.location().set_hash("/admin");

        let root = mount().await;
        assert!(root.inner_html().contains("guarded content"));

        clear_token();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn redirects_to_login_when_no_token_is_persisted() {
        clear_token();
        let window = web_sys::window().unwrap();
        let _ = window.location().set_hash("/admin");

        let root = mount().await;
        assert!(!root.inner_html().contains("guarded content"));
        assert_eq!(window.location().hash().unwrap(), "#/login");

        root.remove();
    }
}
