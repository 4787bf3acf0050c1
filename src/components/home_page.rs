use yew::prelude::*;

use crate::components::{Pagination, PostCard};
use crate::hooks::{use_post_list, PostQuery};
use crate::utils::constants::HOME_PAGE_SIZE;

/// Public landing page: hero plus the published listing, nine per page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let offset = use_state(|| 0u32);
    let list = use_post_list(PostQuery::Public, HOME_PAGE_SIZE, *offset);

    let on_page_change = {
        let offset = offset.clone();
        Callback::from(move |new_offset: u32| offset.set(new_offset))
    };

    html! {
        <div class="home">
            <section class="hero">
                <h1>{"Storia: words, feeling, meaning"}</h1>
                <p>{"A quiet space for stories, where every word finds its meaning."}</p>
                <a href="#articles" class="hero-cta">{"Start reading ↓"}</a>
            </section>

            <section id="articles" class="post-list-section">
                <h2>{"Latest stories"}</h2>

                if list.loading {
                    <p class="list-status">{"Loading posts..."}</p>
                } else if let Some(error) = &list.error {
                    <p class="list-status list-error">{ format!("Error: {}", error) }</p>
                } else {
                    <div class="post-grid">
                        {
                            if list.posts.is_empty() {
                                html! { <p class="list-status">{"Nothing published yet."}</p> }
                            } else {
                                list.posts.iter().map(|post| html! {
                                    <PostCard key={post.id.clone()} post={post.clone()} />
                                }).collect::<Html>()
                            }
                        }
                    </div>
                    <Pagination
                        total={list.total}
                        limit={HOME_PAGE_SIZE}
                        offset={*offset}
                        {on_page_change}
                    />
                }
            </section>
        </div>
    }
}
