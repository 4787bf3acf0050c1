use yew::prelude::*;

use crate::models::Post;
use crate::utils::format_date;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250?text=No+Image";

#[derive(Properties, PartialEq)]
pub struct AdminPostCardProps {
    pub post: Post,
    /// Present on lists that allow deleting; emits the post id.
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

/// Compact card for admin listings with an edit link and optional delete.
#[function_component(AdminPostCard)]
pub fn admin_post_card(props: &AdminPostCardProps) -> Html {
    let post = &props.post;
    let edit_href = format!("#/admin/posts/edit/{}", post.id);
    let image = post
        .featured_image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let delete = props.on_delete.as_ref().map(|on_delete| {
        let on_delete = on_delete.clone();
        let id = post.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    });

    html! {
        <article class="admin-post-card">
            <a href={edit_href.clone()}>
                <img src={image} alt={post.title.clone()} class="admin-post-card-image" />
            </a>
            <div class="admin-post-card-body">
                <a href={edit_href.clone()}>
                    <h3 class="admin-post-card-title">{ &post.title }</h3>
                </a>
                <div class="admin-post-card-meta">
                    <span>{ format_date(&post.created_at) }</span>
                    <span class={format!("status-badge status-{}", post.status)}>
                        { post.status.to_string() }
                    </span>
                </div>
                <div class="admin-post-card-actions">
                    <a href={edit_href} class="card-action">{"Edit"}</a>
                    {
                        match delete {
                            Some(onclick) => html! {
                                <button class="card-action card-action-danger" {onclick}>
                                    {"Delete"}
                                </button>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        </article>
    }
}
