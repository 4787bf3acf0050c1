use yew::prelude::*;

use crate::components::ThemeToggle;
use crate::hooks::use_session;
use crate::router::{self, Route};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

/// Admin chrome: fixed sidebar with navigation and logout, content area on
/// the right.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let session = use_session();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            router::navigate(&Route::Home);
        })
    };

    html! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <div class="admin-brand">{"Storia Admin"}</div>
                <nav class="admin-nav">
                    <a href="#/admin">{"Dashboard"}</a>
                    <a href="#/admin/posts">{"All Posts"}</a>
                    <a href="#/admin/posts/new">{"Add New"}</a>
                </nav>
                <div class="admin-sidebar-footer">
                    <ThemeToggle />
                    <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                </div>
            </aside>
            <main class="admin-main">
                { props.children.clone() }
            </main>
        </div>
    }
}
