use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::model::Post;
use crate::service::error::FetchError;
use crate::service::DataService;

/// Endpoint used when no URL is injected.
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetches posts with a single HTTP GET and decodes the JSON array body.
///
/// Each call issues exactly one request. There is no retry, no caching and
/// no per-request timeout beyond the client defaults.
#[derive(Debug, Clone)]
pub struct RemoteDataService {
    client: Client,
    url: Url,
}

impl RemoteDataService {
    pub fn new(url: Option<Url>) -> Self {
        let url = url.unwrap_or_else(default_url);
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn from_url_str(url: &str) -> Result<Self, FetchError> {
        let parsed = parse_url(url)?;
        Ok(Self::new(Some(parsed)))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Default for RemoteDataService {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl DataService for RemoteDataService {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let url = self.url.as_str();
        tracing::debug!(url, "Fetching posts");

        match self.request().await {
            Ok(posts) => {
                tracing::debug!(url, count = posts.len(), "Fetched posts");
                Ok(posts)
            }
            Err(err) => {
                tracing::debug!(
                    url,
                    kind = err.kind(),
                    transport = err.is_transport(),
                    error = %err,
                    "Failed to fetch posts"
                );
                Err(err)
            }
        }
    }
}

impl RemoteDataService {
    async fn request(&self) -> Result<Vec<Post>, FetchError> {
        let url = self.url.as_str();
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

pub(crate) fn parse_url(url: &str) -> Result<Url, FetchError> {
    Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn default_url() -> Url {
    Url::parse(DEFAULT_POSTS_URL).expect("default posts URL is valid")
}
