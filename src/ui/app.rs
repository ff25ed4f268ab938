use std::sync::Arc;

use crate::service::DataService;
use crate::ui::posts::PostListView;

/// Top-level UI state: the post list screen plus app chrome.
pub struct App {
    should_quit: bool,
    /// Label for the injected service, shown in the header.
    source: String,
    posts: PostListView,
}

impl App {
    /// Must be called from within a tokio runtime; the post fetch starts here.
    pub fn new(service: Arc<dyn DataService>, source: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            source: source.into(),
            posts: PostListView::new(service),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn posts(&self) -> &PostListView {
        &self.posts
    }

    pub fn posts_mut(&mut self) -> &mut PostListView {
        &mut self.posts
    }
}
