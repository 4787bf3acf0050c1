use yew::prelude::*;

use crate::components::ThemeToggle;
use crate::hooks::use_session;
use crate::router::{self, Route};

/// Session-aware top navigation for the public pages.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            router::navigate(&Route::Home);
        })
    };

    html! {
        <nav class="navbar">
            <a href="#/" class="navbar-brand">
                <span class="navbar-logo">{"✦"}</span>
                {"Storia"}
            </a>
            <div class="navbar-actions">
                <ThemeToggle />
                {
                    if session.is_authenticated() {
                        html! {
                            <>
                                <a href="#/admin" class="navbar-link">{"Dashboard"}</a>
                                <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <a href="#/login" class="navbar-link">{"Login"}</a>
                                <a href="#/register" class="navbar-link navbar-link-cta">{"Sign Up"}</a>
                            </>
                        }
                    }
                }
            </div>
        </nav>
    }
}
