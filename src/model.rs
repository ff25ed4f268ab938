//! Domain records shared by the data services and the UI.

use serde::{Deserialize, Serialize};

/// A single post as served by the posts endpoint.
///
/// `id` is the list identity; it is unique within one fetch result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(user_id: i64, id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Built-in fixture used by the mock service when no posts are injected.
pub fn default_fixture() -> Vec<Post> {
    vec![Post::new(1, 1, "one", "one"), Post::new(2, 2, "two", "two")]
}
