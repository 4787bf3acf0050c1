use web_sys::HtmlInputElement;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::models::{Post, PostPayload, PostStatus};
use crate::services::{self, ApiError};
use crate::utils::validation::parse_tags;

/// Everything the editor collected, handed to the page on submit. The
/// image file is uploaded by the page, not here.
pub struct PostFormValues {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags_raw: String,
    pub image: Option<web_sys::File>,
    pub existing_image_url: Option<String>,
}

/// Fields the server would reject anyway; catch them before any upload.
pub fn missing_fields(values: &PostFormValues) -> Option<String> {
    if values.title.trim().is_empty() {
        Some("Title is required.".to_string())
    } else if values.content.trim().is_empty() {
        Some("Content is required.".to_string())
    } else if values.category.trim().is_empty() {
        Some("Category is required.".to_string())
    } else {
        None
    }
}

/// Assemble the create/update payload from what the form collected,
/// uploading a newly picked image first.
pub async fn build_payload(
    values: PostFormValues,
    status: PostStatus,
) -> Result<PostPayload, ApiError> {
    let featured_image_url = match values.image {
        Some(file) => services::upload_image(file).await?,
        None => values.existing_image_url.unwrap_or_default(),
    };

    Ok(PostPayload {
        title: values.title.trim().to_string(),
        content: values.content,
        category: values.category.trim().to_string(),
        status,
        tags: parse_tags(&values.tags_raw),
        featured_image_url,
    })
}

#[derive(Properties, PartialEq)]
pub struct PostFormProps {
    /// Seed values when editing; `None` for a fresh post.
    #[prop_or_default]
    pub initial: Option<Post>,
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_submit: Callback<(PostFormValues, PostStatus)>,
}

/// Shared editor for the new-post and edit-post screens. The two submit
/// buttons differ only in the status they attach.
#[function_component(PostForm)]
pub fn post_form(props: &PostFormProps) -> Html {
    let title = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.title.clone())
            .unwrap_or_default()
    });
    let content = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.content.clone())
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| p.category.clone())
            .unwrap_or_default()
    });
    let tags = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|p| {
                p.tags
                    .iter()
                    .map(|t| t.name.clone())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    });
    let image = use_state(|| None::<web_sys::File>);
    let existing_image_url = props
        .initial
        .as_ref()
        .and_then(|p| p.featured_image_url.clone());

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(area.value());
        })
    };

    let on_image_change = {
        let image = image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            image.set(input.files().and_then(|files| files.get(0)));
        })
    };

    let submit_with = |status: PostStatus| {
        let title = title.clone();
        let content = content.clone();
        let category = category.clone();
        let tags = tags.clone();
        let image = image.clone();
        let existing_image_url = existing_image_url.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            let values = PostFormValues {
                title: (*title).clone(),
                content: (*content).clone(),
                category: (*category).clone(),
                tags_raw: (*tags).clone(),
                image: (*image).clone(),
                existing_image_url: existing_image_url.clone(),
            };
            on_submit.emit((values, status));
        })
    };

    html! {
        <form class="post-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            {
                match &props.error {
                    Some(message) => html! { <p class="form-error">{ message }</p> },
                    None => html! {},
                }
            }

            <label for="title">{"Title"}</label>
            <input
                id="title"
                type="text"
                value={(*title).clone()}
                oninput={bind(&title)}
                placeholder="Give your story a title"
                disabled={props.busy}
            />

            <label for="content">{"Content"}</label>
            <textarea
                id="content"
                rows="14"
                value={(*content).clone()}
                oninput={on_content_input}
                placeholder="Write in Markdown..."
                disabled={props.busy}
            />

            <div class="form-row">
                <div>
                    <label for="category">{"Category"}</label>
                    <input
                        id="category"
                        type="text"
                        value={(*category).clone()}
                        oninput={bind(&category)}
                        disabled={props.busy}
                    />
                </div>
                <div>
                    <label for="tags">{"Tags (comma separated)"}</label>
                    <input
                        id="tags"
                        type="text"
                        value={(*tags).clone()}
                        oninput={bind(&tags)}
                        placeholder="rust, wasm"
                        disabled={props.busy}
                    />
                </div>
            </div>

            <label for="image">{"Featured image"}</label>
            {
                match &existing_image_url {
                    Some(url) if image.is_none() => html! {
                        <img src={url.clone()} alt="Current featured image" class="form-image-preview" />
                    },
                    _ => html! {},
                }
            }
            <input
                id="image"
                type="file"
                accept="image/*"
                onchange={on_image_change}
                disabled={props.busy}
            />

            <div class="form-actions">
                <button
                    type="button"
                    class="btn-primary"
                    onclick={submit_with(PostStatus::Publish)}
                    disabled={props.busy}
                >
                    { if props.busy { "Saving..." } else { "Publish" } }
                </button>
                <button
                    type="button"
                    class="btn-secondary"
                    onclick={submit_with(PostStatus::Draft)}
                    disabled={props.busy}
                >
                    {"Save Draft"}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(title: &str, content: &str, category: &str) -> PostFormValues {
        PostFormValues {
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags_raw: String::new(),
            image: None,
            existing_image_url: None,
        }
    }

    #[test]
    fn missing_fields_reports_the_first_empty_field() {
        assert_eq!(
            missing_fields(&values("  ", "body", "tech")).as_deref(),
            Some("Title is required.")
        );
        assert_eq!(
            missing_fields(&values("t", "", "tech")).as_deref(),
            Some("Content is required.")
        );
        assert_eq!(
            missing_fields(&values("t", "body", " ")).as_deref(),
            Some("Category is required.")
        );
        assert!(missing_fields(&values("t", "body", "tech")).is_none());
    }
}
