use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::router::{self, Route};

/// Credential form. On success the session flips and we land on the
/// dashboard; on failure the server's message is shown inline.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default();

            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Email and password are required.".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);

            let session = session.clone();
            let busy = busy.clone();
            let error = error.clone();
            spawn_local(async move {
                match session.login(email.trim(), &password).await {
                    Ok(()) => {
                        log::info!("✅ Logged in, heading to the dashboard");
                        router::navigate(&Route::Admin);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" {onsubmit}>
                <h1>{"Welcome back"}</h1>
                <p class="auth-sub">{"Sign in to manage your stories."}</p>

                {
                    match &*error {
                        Some(message) => html! { <p class="form-error">{ message }</p> },
                        None => html! {},
                    }
                }

                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    ref={email_ref}
                    placeholder="you@example.com"
                    disabled={*busy}
                />

                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    ref={password_ref}
                    disabled={*busy}
                />

                <button type="submit" class="auth-submit" disabled={*busy}>
                    { if *busy { "Signing in..." } else { "Sign in" } }
                </button>

                <p class="auth-switch">
                    {"No account yet? "}
                    <a href="#/register">{"Create one"}</a>
                </p>
            </form>
        </div>
    }
}
