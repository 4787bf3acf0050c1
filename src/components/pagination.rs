use yew::prelude::*;

use crate::utils::{page_controls, PageItem};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    /// Called with the new offset, always a multiple of `limit` inside the
    /// valid range. Boundary buttons are disabled instead of clamping.
    pub on_page_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let controls = page_controls(props.total, props.limit, props.offset);

    // A single page needs no controls.
    if controls.total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        let offset = controls.offset_for_page(page);
        Callback::from(move |_: MouseEvent| on_page_change.emit(offset))
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="page-btn"
                onclick={go_to(controls.current_page - 1)}
                disabled={!controls.has_prev()}
            >
                {"Previous"}
            </button>
            {
                controls.items.iter().map(|item| match item {
                    PageItem::Page(page) => {
                        let class = if *page == controls.current_page {
                            "page-btn page-current"
                        } else {
                            "page-btn"
                        };
                        html! {
                            <button class={class} onclick={go_to(*page)}>
                                { page.to_string() }
                            </button>
                        }
                    }
                    PageItem::Ellipsis => html! {
                        <span class="page-ellipsis">{"…"}</span>
                    },
                }).collect::<Html>()
            }
            <button
                class="page-btn"
                onclick={go_to(controls.current_page + 1)}
                disabled={!controls.has_next()}
            >
                {"Next"}
            </button>
        </nav>
    }
}
