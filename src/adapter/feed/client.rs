//! HTTP Feed Repository Implementation
//!
//! FeedRepositoryのHTTP実装

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;

use crate::adapter::http::read_body_limited;
use crate::domain::entities::feed_entry::FeedEntry;
use crate::domain::errors::{FetchError, ParseError};
use crate::domain::repositories::feed_repository::FeedRepository;

use super::parser::parse_feed;

/// フィードのレスポンスボディの上限（10 MiB）
pub const MAX_FEED_BODY_SIZE: usize = 10 * 1024 * 1024;

/// HTTPベースのフィードリポジトリ
pub struct HttpFeedRepository {
    client: Client,
}

impl HttpFeedRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `client` - タイムアウト設定済みの共有HTTPクライアント
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedRepository for HttpFeedRepository {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Fetching feed from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let (body, truncated) = read_body_limited(response, MAX_FEED_BODY_SIZE)
            .await
            .map_err(|e| FetchError::Body { source: e.into() })?;

        if truncated {
            warn!(
                "Feed body from {} exceeded {} bytes and was truncated",
                url, MAX_FEED_BODY_SIZE
            );
        }

        Ok(body)
    }

    fn parse(&self, data: &[u8]) -> Result<Vec<FeedEntry>, ParseError> {
        parse_feed(data)
    }
}
