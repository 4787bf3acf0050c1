use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::Post;
use crate::services::{self, ApiError};
use crate::utils::format_date;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x450";

#[derive(Properties, PartialEq)]
pub struct PostDetailPageProps {
    pub id: String,
}

/// Public post detail, fetched by id. Distinguishes loading, error and
/// not-found states.
#[function_component(PostDetailPage)]
pub fn post_detail_page(props: &PostDetailPageProps) -> Html {
    let post = use_state(|| None::<Post>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let not_found = use_state(|| false);

    {
        let post = post.clone();
        let loading = loading.clone();
        let error = error.clone();
        let not_found = not_found.clone();

        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            error.set(None);
            not_found.set(false);

            spawn_local(async move {
                match services::get_post(&id).await {
                    Ok(fetched) => post.set(Some(fetched)),
                    Err(ApiError::NotFound) => not_found.set(true),
                    Err(err) => {
                        log::error!("❌ Failed to fetch post {}: {}", id, err);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    if *loading {
        return html! { <div class="detail-status">{"Loading post..."}</div> };
    }
    if let Some(error) = &*error {
        return html! { <div class="detail-status detail-error">{ format!("Error: {}", error) }</div> };
    }
    if *not_found {
        return html! { <div class="detail-status">{"Post not found."}</div> };
    }
    let Some(post) = &*post else {
        return html! { <div class="detail-status">{"Post not found."}</div> };
    };

    let image = post
        .featured_image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    html! {
        <article class="post-detail">
            <nav class="breadcrumbs">
                <a href="#/">{"Blog"}</a>
                <span class="crumb-sep">{">"}</span>
                <span class="crumb-current">{ &post.title }</span>
            </nav>

            <h1 class="post-detail-title">{ &post.title }</h1>

            <div class="post-detail-meta">
                <span class="post-author">{ post.author_name() }</span>
                <span class="meta-sep">{"•"}</span>
                <span>{ format_date(&post.created_at) }</span>
            </div>

            <img src={image} alt={post.title.clone()} class="post-detail-image" />

            <div class="post-detail-content">
                { post.content.lines().map(|line| html! { <p>{ line }</p> }).collect::<Html>() }
            </div>

            {
                if post.tags.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="post-detail-tags">
                            {
                                post.tags.iter().map(|tag| html! {
                                    <span class="tag-pill" key={tag.name.clone()}>{ &tag.name }</span>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                }
            }
        </article>
    }
}
