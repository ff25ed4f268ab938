use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::model::Post;
use crate::service::DataService;
use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostListIntent;
use crate::ui::posts::reducer::PostListReducer;
use crate::ui::posts::state::PostListState;

/// Holds the observable post list for one view.
///
/// Construction starts exactly one fetch on the injected service. The result
/// is reduced into a `watch` slot that views subscribe to. Dropping the view
/// model aborts a fetch that is still in flight.
pub struct PostListViewModel {
    slot: Arc<watch::Sender<PostListState>>,
    fetch: Option<JoinHandle<()>>,
}

impl PostListViewModel {
    /// Must be called from within a tokio runtime. On the current-thread
    /// runtime the binary uses, the fetch cannot complete before this returns.
    pub fn new(service: Arc<dyn DataService>) -> Self {
        let (slot, _) = watch::channel(PostListState::default());
        let slot = Arc::new(slot);
        let fetch = tokio::spawn(load_posts(service, Arc::clone(&slot)));
        Self {
            slot,
            fetch: Some(fetch),
        }
    }

    pub fn state(&self) -> PostListState {
        self.slot.borrow().clone()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.slot.borrow().posts().to_vec()
    }

    pub fn subscribe(&self) -> watch::Receiver<PostListState> {
        self.slot.subscribe()
    }

    /// Waits until the fetch has finished and its result, if any, is published.
    ///
    /// A panic inside the service is resumed on the caller.
    pub async fn settled(&mut self) {
        let Some(fetch) = self.fetch.take() else {
            return;
        };
        if let Err(err) = fetch.await {
            if err.is_panic() {
                std::panic::resume_unwind(err.into_panic());
            }
        }
    }
}

impl Drop for PostListViewModel {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}

async fn load_posts(service: Arc<dyn DataService>, slot: Arc<watch::Sender<PostListState>>) {
    let intent = match service.fetch_posts().await {
        Ok(posts) => PostListIntent::FetchSucceeded { posts },
        Err(_) => PostListIntent::FetchFailed,
    };
    dispatch(&slot, intent);
}

fn dispatch(slot: &watch::Sender<PostListState>, intent: PostListIntent) {
    slot.send_if_modified(|state| {
        let next = PostListReducer::reduce(state.clone(), intent);
        if next == *state {
            return false;
        }
        *state = next;
        true
    });
}
