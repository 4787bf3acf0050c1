use yew::prelude::*;

use crate::components::{AdminPostCard, Pagination};
use crate::hooks::{use_post_list, PostQuery};
use crate::models::PostStatus;
use crate::utils::constants::ADMIN_PAGE_SIZE;

const TABS: [(&str, PostStatus); 3] = [
    ("Published", PostStatus::Publish),
    ("Drafts", PostStatus::Draft),
    ("Trashed", PostStatus::Trash),
];

/// Full admin listing with status tabs and per-post delete. Switching
/// tabs resets to the first page.
#[function_component(AllPostsPage)]
pub fn all_posts_page() -> Html {
    let status = use_state(|| PostStatus::Publish);
    let offset = use_state(|| 0u32);
    let list = use_post_list(
        PostQuery::Admin { status: *status },
        ADMIN_PAGE_SIZE,
        *offset,
    );

    let select_tab = |tab: PostStatus| {
        let status = status.clone();
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(tab);
            offset.set(0);
        })
    };

    let on_page_change = {
        let offset = offset.clone();
        Callback::from(move |new_offset: u32| offset.set(new_offset))
    };

    html! {
        <div class="all-posts">
            <header class="admin-page-header">
                <h1>{"All Posts"}</h1>
                <a href="#/admin/posts/new" class="btn-primary">{"Add New Post"}</a>
            </header>

            <nav class="tabs" role="tablist">
                {
                    TABS.iter().map(|(label, tab)| {
                        let class = if *tab == *status { "tab tab-active" } else { "tab" };
                        html! {
                            <button
                                key={*label}
                                {class}
                                role="tab"
                                onclick={select_tab(*tab)}
                            >
                                { *label }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </nav>

            if list.loading {
                <p class="list-status">{"Loading posts..."}</p>
            } else if let Some(error) = &list.error {
                <p class="list-status list-error">{ format!("Error: {}", error) }</p>
            } else if list.posts.is_empty() {
                <p class="list-status">{ format!("No {} posts.", status.as_str()) }</p>
            } else {
                <div class="admin-post-grid">
                    {
                        list.posts.iter().map(|post| html! {
                            <AdminPostCard
                                key={post.id.clone()}
                                post={post.clone()}
                                on_delete={list.delete.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
                <Pagination
                    total={list.total}
                    limit={ADMIN_PAGE_SIZE}
                    offset={*offset}
                    {on_page_change}
                />
            }
        </div>
    }
}
