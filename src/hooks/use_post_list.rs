use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};
use crate::models::{Post, PostListResponse, PostStatus};
use crate::services::{self, ApiError};

/// Which slice of posts a listing view is looking at.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PostQuery {
    /// Published posts, anonymous access.
    Public,
    /// The signed-in author's published posts (dashboard).
    MinePublished,
    /// Admin listing filtered by the active status tab.
    Admin { status: PostStatus },
}

impl PostQuery {
    fn requires_auth(&self) -> bool {
        !matches!(self, PostQuery::Public)
    }

    async fn fetch(&self, limit: u32, offset: u32) -> Result<PostListResponse, ApiError> {
        match self {
            PostQuery::Public => services::get_posts(limit, offset).await,
            PostQuery::MinePublished => {
                services::get_my_posts(limit, offset, Some(PostStatus::Publish), Some(true)).await
            }
            PostQuery::Admin { status } => {
                services::get_admin_posts(*status, limit, offset).await
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UsePostListHandle {
    pub posts: Vec<Post>,
    pub total: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Optimistic delete: removes the item locally first, reinserts it at
    /// its original index if the server rejects the DELETE.
    pub delete: Callback<String>,
}

/// One page of posts for a listing view. Exactly one fetch is issued per
/// `(query, offset)` change; responses from superseded fetches are
/// discarded via a generation counter, so a fast tab switch cannot let a
/// stale response overwrite newer state.
#[hook]
pub fn use_post_list(query: PostQuery, limit: u32, offset: u32) -> UsePostListHandle {
    let session = use_session();
    let posts = use_state(Vec::<Post>::new);
    let total = use_state(|| 0u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let generation = use_mut_ref(|| 0u64);

    {
        let session = session.clone();
        let posts = posts.clone();
        let total = total.clone();
        let loading = loading.clone();
        let error = error.clone();
        let generation = generation.clone();

        use_effect_with((query.clone(), offset), move |(query, offset)| {
            *generation.borrow_mut() += 1;
            let this_generation = *generation.borrow();

            loading.set(true);
            error.set(None);

            let query = query.clone();
            let offset = *offset;
            spawn_local(async move {
                let result = query.fetch(limit, offset).await;

                // A newer fetch was issued while this one was in flight.
                if *generation.borrow() != this_generation {
                    return;
                }

                match result {
                    Ok(list) => {
                        posts.set(list.data);
                        total.set(list.meta.total);
                    }
                    Err(ApiError::Unauthorized) if query.requires_auth() => {
                        session.expire();
                    }
                    Err(err) => {
                        log::error!("❌ Failed to fetch posts: {}", err);
                        posts.set(Vec::new());
                        total.set(0);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    let delete = make_delete(session, posts.clone(), total.clone(), error.clone());

    UsePostListHandle {
        posts: (*posts).clone(),
        total: *total,
        loading: *loading,
        error: (*error).clone(),
        delete,
    }
}

fn make_delete(
    session: UseSessionHandle,
    posts: UseStateHandle<Vec<Post>>,
    total: UseStateHandle<u32>,
    error: UseStateHandle<Option<String>>,
) -> Callback<String> {
    Callback::from(move |id: String| {
        let mut remaining = (*posts).clone();
        let Some((index, removed)) = remove_by_id(&mut remaining, &id) else {
            return;
        };

        let total_before = *total;
        posts.set(remaining.clone());
        total.set(total_before.saturating_sub(1));

        let session = session.clone();
        let posts = posts.clone();
        let total = total.clone();
        let error = error.clone();
        spawn_local(async move {
            match services::delete_post(&id).await {
                Ok(()) => {}
                Err(ApiError::Unauthorized) => session.expire(),
                Err(err) => {
                    log::error!("❌ Delete failed, restoring post {}: {}", id, err);
                    let mut restored = remaining;
                    restore_at(&mut restored, index, removed);
                    posts.set(restored);
                    total.set(total_before);
                    error.set(Some(err.to_string()));
                }
            }
        });
    })
}

/// Remove the post with the given id, reporting its original position so
/// a failed delete can put it back.
fn remove_by_id(posts: &mut Vec<Post>, id: &str) -> Option<(usize, Post)> {
    let index = posts.iter().position(|p| p.id == id)?;
    Some((index, posts.remove(index)))
}

fn restore_at(posts: &mut Vec<Post>, index: usize, post: Post) {
    let index = index.min(posts.len());
    posts.insert(index, post);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostStatus;

    fn post(id: &str) -> Post {
        serde_json::from_str(&format!(
            r#"{{"ID": "{}", "title": "t-{}", "status": "publish"}}"#,
            id, id
        ))
        .unwrap()
    }

    #[test]
    fn removes_exactly_the_matching_post() {
        let mut posts: Vec<Post> = ["a", "b", "c", "d", "e"].iter().map(|id| post(id)).collect();
        let (index, removed) = remove_by_id(&mut posts, "c").unwrap();
        assert_eq!(index, 2);
        assert_eq!(removed.id, "c");
        assert_eq!(posts.len(), 4);
        assert!(posts.iter().all(|p| p.id != "c"));
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let mut posts = vec![post("a")];
        assert!(remove_by_id(&mut posts, "zzz").is_none());
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn rollback_reinserts_at_the_original_index() {
        let mut posts: Vec<Post> = ["a", "b", "c"].iter().map(|id| post(id)).collect();
        let (index, removed) = remove_by_id(&mut posts, "b").unwrap();
        restore_at(&mut posts, index, removed);
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn rollback_clamps_when_the_list_shrank_meanwhile() {
        let mut posts = vec![post("a")];
        restore_at(&mut posts, 5, post("z"));
        assert_eq!(posts.last().unwrap().id, "z");
    }

    #[test]
    fn only_the_public_query_skips_auth() {
        assert!(!PostQuery::Public.requires_auth());
        assert!(PostQuery::MinePublished.requires_auth());
        assert!(PostQuery::Admin { status: PostStatus::Draft }.requires_auth());
    }
}
