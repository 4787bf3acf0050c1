use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::post_form::{build_payload, missing_fields, PostForm, PostFormValues};
use crate::hooks::use_session;
use crate::models::PostStatus;
use crate::router::{self, Route};
use crate::services::{self, ApiError};

#[function_component(NewPostPage)]
pub fn new_post_page() -> Html {
    let session = use_session();
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let session = session.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |(values, status): (PostFormValues, PostStatus)| {
            if *busy {
                return;
            }
            if let Some(message) = missing_fields(&values) {
                error.set(Some(message));
                return;
            }

            busy.set(true);
            error.set(None);

            let session = session.clone();
            let busy = busy.clone();
            let error = error.clone();
            spawn_local(async move {
                let result = async {
                    let payload = build_payload(values, status).await?;
                    services::create_post(&payload).await
                }
                .await;

                match result {
                    Ok(post) => {
                        log::info!("✅ Created post {}", post.id);
                        router::navigate(&Route::AdminPosts);
                    }
                    Err(ApiError::Unauthorized) => session.expire(),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="post-editor">
            <header class="admin-page-header">
                <h1>{"Add New Post"}</h1>
            </header>
            <PostForm busy={*busy} error={(*error).clone()} {on_submit} />
        </div>
    }
}
