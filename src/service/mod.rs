//! Data services that supply posts to the view model.
//!
//! The view model only sees [`DataService`]; which implementation it gets is
//! decided once, at construction, by whoever builds it.

pub mod error;
pub mod mock;
pub mod remote;

pub use error::{FetchError, ServiceError};
pub use mock::MockDataService;
pub use remote::{RemoteDataService, DEFAULT_POSTS_URL};

use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::{ServiceConfig, ServiceKind};
use crate::model::Post;

/// Capability that produces the list of posts to display.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Fetch the full list of posts once.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Build the service selected by configuration.
pub fn from_config(config: &ServiceConfig) -> Result<Arc<dyn DataService>, ServiceError> {
    match config.kind {
        ServiceKind::Remote => {
            let service = match config.url.as_deref() {
                Some(url) => RemoteDataService::from_url_str(url)?,
                None => RemoteDataService::default(),
            };
            tracing::info!(url = service.url().as_str(), "Using remote data service");
            Ok(Arc::new(service))
        }
        ServiceKind::Mock => {
            let posts = match config.fixture.as_deref() {
                Some(path) => Some(load_fixture(path)?),
                None => None,
            };
            tracing::info!(
                fixture = ?config.fixture,
                "Using mock data service"
            );
            Ok(Arc::new(MockDataService::new(posts)))
        }
    }
}

/// Read a JSON array of posts from disk.
pub fn load_fixture(path: &Path) -> Result<Vec<Post>, ServiceError> {
    let content = fs::read_to_string(path).map_err(|e| ServiceError::FixtureRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ServiceError::FixtureParse {
        path: path.to_path_buf(),
        source: e,
    })
}
