use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::router::{self, Route};
use crate::services;
use crate::utils::validation::password_issues;

/// Account creation form. Password rules are checked as the user types;
/// a successful registration logs the new author straight in.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let issues = password_issues(&password, &full_name, &email);
    let passwords_match = *password == *confirm;

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let name = full_name.trim().to_string();
            let mail = email.trim().to_string();
            if name.is_empty() || mail.is_empty() {
                error.set(Some("Full name and email are required.".to_string()));
                return;
            }
            let issues = password_issues(&password, &name, &mail);
            if !issues.is_empty() {
                error.set(Some(format!("Password needs: {}.", issues.join(", "))));
                return;
            }
            if *password != *confirm {
                error.set(Some("Passwords do not match.".to_string()));
                return;
            }

            busy.set(true);
            error.set(None);

            let session = session.clone();
            let pass = (*password).clone();
            let busy = busy.clone();
            let error = error.clone();
            spawn_local(async move {
                match services::register(&name, &mail, &pass).await {
                    Ok(user) => {
                        log::info!("✅ Welcome aboard, {}", user.full_name);
                        match session.login(&mail, &pass).await {
                            Ok(()) => router::navigate(&Route::Admin),
                            // Account exists; let them sign in by hand.
                            Err(_) => router::navigate(&Route::Login),
                        }
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
                <h1>{"Create your account"}</h1>
                <p class="auth-sub">{"Start writing on Storia."}</p>

                {
                    match &*error {
                        Some(message) => html! { <p class="form-error">{ message }</p> },
                        None => html! {},
                    }
                }

                <label for="full-name">{"Full name"}</label>
                <input
                    id="full-name"
                    type="text"
                    value={(*full_name).clone()}
                    oninput={bind(&full_name)}
                    disabled={*busy}
                />

                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                    disabled={*busy}
                />

                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                    disabled={*busy}
                />
                {
                    if password.is_empty() || issues.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="password-hints">
                                { issues.iter().map(|issue| html! {
                                    <li key={issue.clone()}>{ issue }</li>
                                }).collect::<Html>() }
                            </ul>
                        }
                    }
                }

                <label for="confirm">{"Confirm password"}</label>
                <input
                    id="confirm"
                    type="password"
                    value={(*confirm).clone()}
                    oninput={bind(&confirm)}
                    disabled={*busy}
                />
                {
                    if confirm.is_empty() || passwords_match {
                        html! {}
                    } else {
                        html! { <p class="form-hint">{"Passwords do not match."}</p> }
                    }
                }

                <button type="submit" class="auth-submit" disabled={*busy}>
                    { if *busy { "Creating account..." } else { "Sign up" } }
                </button>

                <p class="auth-switch">
                    {"Already registered? "}
                    <a href="#/login">{"Sign in"}</a>
                </p>
            </form>
        </div>
    }
}
