use yew::prelude::*;

use crate::models::Post;
use crate::utils::{excerpt, format_date};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250?text=No+Image";

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

/// Card for the public listing: image, title, author, date, excerpt.
#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let href = format!("#/posts/{}", post.id);
    let image = post
        .featured_image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    html! {
        <article class="post-card">
            <a href={href.clone()}>
                <img src={image} alt={post.title.clone()} class="post-card-image" />
            </a>
            <div class="post-card-body">
                <a href={href.clone()}>
                    <h3 class="post-card-title">{ &post.title }</h3>
                </a>
                <div class="post-card-meta">
                    <span>{ post.author_name() }</span>
                    <span class="meta-sep">{"•"}</span>
                    <span>{ format_date(&post.created_at) }</span>
                </div>
                <p class="post-card-excerpt">{ excerpt(&post.content, 150) }</p>
                <a href={href} class="post-card-more">{"Read more →"}</a>
            </div>
        </article>
    }
}
