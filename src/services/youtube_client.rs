//! YouTube Data API search client
//!
//! Issues embeddable-video search queries and returns up to five
//! candidates in result order. Transport and shape failures collapse to an
//! empty candidate list after logging; the caller treats "no candidates"
//! as its own outcome, not an error.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ServiceConfig;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESULTS: &str = "5";

/// YouTube client errors (internal; collapsed at the public boundary)
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// One search result, before selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub title: String,
    pub video_id: String,
}

impl VideoCandidate {
    /// Watch-page URL for this candidate
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

/// YouTube Data API client
#[derive(Clone)]
pub struct YouTubeClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, SearchError> {
        let http_client = reqwest::Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: config.youtube_search_endpoint.clone(),
            api_key: config.youtube_api_key.clone(),
        })
    }

    /// Search for embeddable videos matching `query`, in result order.
    pub async fn search(&self, query: &str) -> Vec<VideoCandidate> {
        match self.search_inner(query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(error = %e, query = %query, "YouTube search failed");
                Vec::new()
            }
        }
    }

    async fn search_inner(&self, query: &str) -> Result<Vec<VideoCandidate>, SearchError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", MAX_RESULTS),
                ("videoEmbeddable", "true"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SearchError::Api(status.as_u16(), error_text));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(body
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoCandidate {
                    title: item.snippet.title,
                    video_id,
                })
            })
            .collect())
    }
}
