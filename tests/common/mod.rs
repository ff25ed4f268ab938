//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use postboard::model::Post;
use postboard::service::{DataService, FetchError};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn sample_posts(count: i64) -> Vec<Post> {
    (1..=count)
        .map(|id| Post::new(1, id, format!("Title {id}"), format!("Body of post {id}")))
        .collect()
}

// -- Service doubles ----------------------------------------------------------

/// Service that counts calls and returns fixed posts.
#[derive(Default)]
pub struct CountingService {
    calls: AtomicUsize,
    posts: Vec<Post>,
}

impl CountingService {
    pub fn new(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            posts,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataService for CountingService {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

/// Service whose fetch never completes.
pub struct PendingService;

#[async_trait]
impl DataService for PendingService {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        std::future::pending().await
    }
}

// -- Rendering helpers --------------------------------------------------------

pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal")
}

/// Rows of the buffer as plain strings, trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Number of card top-left corners in the buffer.
pub fn count_cards(buffer: &Buffer) -> usize {
    buffer.content.iter().filter(|cell| cell.symbol() == "┌").count()
}
