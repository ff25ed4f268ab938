use crate::model::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostListIntent {
    /// Fetch completed with posts in service order.
    FetchSucceeded { posts: Vec<Post> },
    /// Fetch failed. Carries nothing; the error is not kept.
    FetchFailed,
}

impl Intent for PostListIntent {}
