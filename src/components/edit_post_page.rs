use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::post_form::{build_payload, missing_fields, PostForm, PostFormValues};
use crate::hooks::use_session;
use crate::models::{Post, PostStatus};
use crate::router::{self, Route};
use crate::services::{self, ApiError};

#[derive(Properties, PartialEq)]
pub struct EditPostPageProps {
    pub id: String,
}

/// Loads the post, then reuses the shared editor seeded with it.
#[function_component(EditPostPage)]
pub fn edit_post_page(props: &EditPostPageProps) -> Html {
    let session = use_session();
    let post = use_state(|| None::<Post>);
    let loading = use_state(|| true);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let session = session.clone();
        let post = post.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match services::get_post(&id).await {
                    Ok(fetched) => post.set(Some(fetched)),
                    Err(ApiError::Unauthorized) => session.expire(),
                    Err(err) => {
                        log::error!("❌ Could not load post {} for editing: {}", id, err);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    let on_submit = {
        let session = session.clone();
        let id = props.id.clone();
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
            let id = id.clone();
            let busy = busy.clone();
            let error = error.clone();
            spawn_local(async move {
                let result = async {
                    let payload = build_payload(values, status).await?;
                    services::update_post(&id, &payload).await
                }
                .await;

                match result {
                    Ok(post) => {
                        log::info!("✅ Updated post {}", post.id);
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
                <h1>{"Edit Post"}</h1>
            </header>
            {
                if *loading {
                    html! { <p class="list-status">{"Loading post..."}</p> }
                } else if let Some(post) = &*post {
                    html! {
                        <PostForm
                            initial={post.clone()}
                            busy={*busy}
                            error={(*error).clone()}
                            {on_submit}
                        />
                    }
                } else {
                    html! {
                        <p class="list-status list-error">
                            { (*error).clone().unwrap_or_else(|| "Post not found.".to_string()) }
                        </p>
                    }
                }
            }
        </div>
    }
}
