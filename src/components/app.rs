use yew::prelude::*;

use crate::components::{
    AdminLayout, AllPostsPage, DashboardPage, EditPostPage, HomePage, LoginPage, NewPostPage,
    PostDetailPage, PublicLayout, RegisterPage, RouteGuard,
};
use crate::hooks::{use_session_provider, UseSessionHandle};
use crate::router::{use_route, Route};

/// Application root: owns the session and hands it down via context, then
/// switches on the current route.
#[function_component(App)]
pub fn app() -> Html {
    let session = use_session_provider();

    html! {
        <ContextProvider<UseSessionHandle> context={session}>
            <Switch />
        </ContextProvider<UseSessionHandle>>
    }
}

#[function_component(Switch)]
fn switch() -> Html {
    let route = use_route();

    match route {
        Route::Home => html! {
            <PublicLayout><HomePage /></PublicLayout>
        },
        Route::PostDetail { id } => html! {
            <PublicLayout><PostDetailPage {id} /></PublicLayout>
        },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Admin => admin(html! { <DashboardPage /> }),
        Route::AdminPosts => admin(html! { <AllPostsPage /> }),
        Route::AdminPostNew => admin(html! { <NewPostPage /> }),
        Route::AdminPostEdit { id } => admin(html! { <EditPostPage {id} /> }),
        Route::NotFound => html! {
            <PublicLayout>
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page does not exist."}</p>
                    <a href="#/">{"Back to home"}</a>
                </div>
            </PublicLayout>
        },
    }
}

/// Every admin screen sits behind the guard and shares the admin chrome.
fn admin(page: Html) -> Html {
    html! {
        <RouteGuard>
            <AdminLayout>{page}</AdminLayout>
        </RouteGuard>
    }
}
