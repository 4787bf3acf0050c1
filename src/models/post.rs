use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a post. The backend stores it as a lowercase string.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Publish,
    Trash,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Publish => "publish",
            PostStatus::Trash => "trash",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Author {
    pub full_name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A post as returned by the backend. The id and timestamp keep the
/// backend's Go-style field casing on the wire.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Post {
    #[serde(rename = "ID")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub status: PostStatus,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(rename = "CreatedAt", default)]
    pub created_at: String,
    #[serde(default)]
    pub author: Option<Author>,
}

impl Post {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.full_name.as_str())
            .unwrap_or("Anonymous")
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ListMeta {
    #[serde(default)]
    pub total: u32,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PostListResponse {
    #[serde(default)]
    pub data: Vec<Post>,
    #[serde(default)]
    pub meta: ListMeta,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PostResponse {
    pub data: Post,
}

/// Body for POST /posts and PUT /posts/:id.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: PostStatus,
    pub tags: Vec<String>,
    pub featured_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_backend_casing() {
        let json = r#"{
            "ID": "abc-123",
            "title": "Hello",
            "content": "Body",
            "category": "Tech",
            "status": "publish",
            "tags": [{"name": "rust"}],
            "featured_image_url": null,
            "CreatedAt": "2025-01-02T03:04:05Z",
            "author": {"full_name": "Jane Doe"}
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "abc-123");
        assert_eq!(post.status, PostStatus::Publish);
        assert_eq!(post.created_at, "2025-01-02T03:04:05Z");
        assert_eq!(post.author_name(), "Jane Doe");
        assert_eq!(post.tags[0].name, "rust");
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"ID": "x", "title": "t", "status": "draft"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.tags.is_empty());
        assert!(post.featured_image_url.is_none());
        assert_eq!(post.author_name(), "Anonymous");
    }

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&PostStatus::Trash).unwrap(), "\"trash\"");
        let status: PostStatus = serde_json::from_str("\"publish\"").unwrap();
        assert_eq!(status, PostStatus::Publish);
        assert_eq!(status.to_string(), "publish");
    }

    #[test]
    fn list_response_defaults_when_meta_missing() {
        let json = r#"{"data": []}"#;
        let list: PostListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.meta.total, 0);
        assert!(list.data.is_empty());
    }
}
