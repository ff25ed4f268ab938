//! Tests for the post list view model and its observable slot.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{sample_posts, CountingService, PendingService};
use postboard::model::{default_fixture, Post};
use postboard::service::{MockDataService, RemoteDataService};
use postboard::ui::posts::{PostListState, PostListViewModel};
use std::sync::Arc;
use std::time::Duration;

// -- mock service -------------------------------------------------------------

#[tokio::test]
async fn publishes_injected_posts_in_order() {
    let posts = vec![
        Post::new(4, 40, "d", "fourth"),
        Post::new(1, 10, "a", "first"),
        Post::new(3, 30, "c", "third"),
    ];
    let mut view_model = PostListViewModel::new(Arc::new(MockDataService::new(Some(posts.clone()))));
    view_model.settled().await;

    assert_eq!(view_model.posts(), posts);
}

#[tokio::test]
async fn publishes_default_fixture_without_injected_posts() {
    let mut view_model = PostListViewModel::new(Arc::new(MockDataService::new(None)));
    view_model.settled().await;

    assert_eq!(view_model.posts(), default_fixture());
    assert_eq!(
        view_model.posts(),
        vec![Post::new(1, 1, "one", "one"), Post::new(2, 2, "two", "two")]
    );
}

#[tokio::test]
async fn slot_is_empty_when_construction_returns() {
    let view_model = PostListViewModel::new(Arc::new(MockDataService::default()));

    assert!(view_model.posts().is_empty());
    assert_eq!(view_model.state(), PostListState::AwaitingFirstResult);
}

#[tokio::test(flavor = "current_thread")]
async fn slot_stays_empty_until_runtime_yields() {
    for _ in 0..500 {
        let view_model = PostListViewModel::new(Arc::new(MockDataService::default()));
        assert_eq!(view_model.state(), PostListState::AwaitingFirstResult);
    }
}

#[tokio::test]
async fn subscribers_see_the_delivery() {
    let view_model = PostListViewModel::new(Arc::new(MockDataService::default()));
    let mut rx = view_model.subscribe();

    tokio::time::timeout(Duration::from_secs(1), rx.changed())
        .await
        .expect("no delivery")
        .unwrap();

    assert_eq!(rx.borrow().posts(), default_fixture().as_slice());
}

// -- fetch count --------------------------------------------------------------

#[tokio::test]
async fn triggers_exactly_one_fetch() {
    let service = CountingService::new(sample_posts(2));
    let mut view_model = PostListViewModel::new(service.clone());
    view_model.settled().await;

    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn second_instance_fetches_independently() {
    let service = CountingService::new(sample_posts(2));

    let mut first = PostListViewModel::new(service.clone());
    first.settled().await;
    let mut second = PostListViewModel::new(service.clone());
    second.settled().await;

    assert_eq!(service.calls(), 2);
    assert_eq!(first.posts(), second.posts());
}

// -- remote service -----------------------------------------------------------

#[tokio::test]
async fn remote_success_populates_slot() {
    let backend = MockBackend::start().await;
    let posts = sample_posts(5);
    backend.enqueue_response(MockResponse::posts(&posts)).await;

    let service = RemoteDataService::from_url_str(&backend.posts_url()).unwrap();
    let mut view_model = PostListViewModel::new(Arc::new(service));
    view_model.settled().await;

    assert_eq!(view_model.posts(), posts);
}

#[tokio::test]
async fn remote_decode_failure_leaves_slot_empty() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::text("definitely not an array"))
        .await;

    let service = RemoteDataService::from_url_str(&backend.posts_url()).unwrap();
    let mut view_model = PostListViewModel::new(Arc::new(service));
    view_model.settled().await;

    assert_eq!(view_model.state(), PostListState::AwaitingFirstResult);
    assert!(view_model.posts().is_empty());
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn remote_error_status_leaves_slot_empty() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(404, "missing"))
        .await;

    let service = RemoteDataService::from_url_str(&backend.posts_url()).unwrap();
    let mut view_model = PostListViewModel::new(Arc::new(service));
    view_model.settled().await;

    assert!(view_model.posts().is_empty());
}

// -- lifetime -----------------------------------------------------------------

#[tokio::test]
async fn dropping_view_model_releases_pending_fetch() {
    let service: Arc<PendingService> = Arc::new(PendingService);
    let view_model = PostListViewModel::new(service.clone());
    let rx = view_model.subscribe();

    tokio::task::yield_now().await;
    assert_eq!(Arc::strong_count(&service), 2);

    drop(view_model);
    for _ in 0..10 {
        if Arc::strong_count(&service) == 1 {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert_eq!(Arc::strong_count(&service), 1);
    assert!(!rx.has_changed().unwrap_or(false));
}
