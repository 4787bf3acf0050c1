use yew::prelude::*;

use crate::components::{AdminPostCard, Pagination};
use crate::hooks::{use_post_list, PostQuery};
use crate::utils::constants::DASHBOARD_PAGE_SIZE;

/// Admin landing: the signed-in author's published posts, three per page.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let offset = use_state(|| 0u32);
    let list = use_post_list(PostQuery::MinePublished, DASHBOARD_PAGE_SIZE, *offset);

    let on_page_change = {
        let offset = offset.clone();
        Callback::from(move |new_offset: u32| offset.set(new_offset))
    };

    html! {
        <div class="dashboard">
            <header class="admin-page-header">
                <h1>{"Dashboard"}</h1>
                <a href="#/admin/posts/new" class="btn-primary">{"Add New Post"}</a>
            </header>

            <h2>{"Your published posts"}</h2>

            if list.loading {
                <p class="list-status">{"Loading your posts..."}</p>
            } else if let Some(error) = &list.error {
                <p class="list-status list-error">{ format!("Error: {}", error) }</p>
            } else if list.posts.is_empty() {
                <p class="list-status">
                    {"Nothing published yet. "}
                    <a href="#/admin/posts/new">{"Write your first post"}</a>
                </p>
            } else {
                <div class="admin-post-grid">
                    {
                        list.posts.iter().map(|post| html! {
                            <AdminPostCard key={post.id.clone()} post={post.clone()} />
                        }).collect::<Html>()
                    }
                </div>
                <Pagination
                    total={list.total}
                    limit={DASHBOARD_PAGE_SIZE}
                    offset={*offset}
                    {on_page_change}
                />
            }
        </div>
    }
}
