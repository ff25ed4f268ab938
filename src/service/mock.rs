use async_trait::async_trait;

use crate::model::{default_fixture, Post};
use crate::service::error::FetchError;
use crate::service::DataService;

/// In-memory service for previews and tests.
///
/// Completes immediately with its stored posts. The failure channel exists
/// only because the trait requires it; this service never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct MockDataService {
    posts: Vec<Post>,
}

impl MockDataService {
    pub fn new(posts: Option<Vec<Post>>) -> Self {
        Self {
            posts: posts.unwrap_or_else(default_fixture),
        }
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl DataService for MockDataService {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        Ok(self.posts.clone())
    }
}
