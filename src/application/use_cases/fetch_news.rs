//! # Fetch News Use Case
//!
//! フィードの取得とパースのユースケース

use std::sync::Arc;

use log::info;

use crate::domain::entities::feed_entry::FeedEntry;
use crate::domain::errors::FeedError;
use crate::domain::repositories::feed_repository::FeedRepository;

/// ニュース取得ユースケース
///
/// フィードを取得し、エントリのリストに変換する
pub struct FetchNewsUseCase<R: FeedRepository> {
    feed_repository: Arc<R>,
}

impl<R: FeedRepository> FetchNewsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `feed_repository` - フィードリポジトリ
    pub fn new(feed_repository: Arc<R>) -> Self {
        Self { feed_repository }
    }

    /// フィードを取得してパースする
    ///
    /// # Arguments
    ///
    /// * `url` - フィードのURL
    ///
    /// # Returns
    ///
    /// 文書順のフィードエントリ
    ///
    /// # Errors
    ///
    /// 取得またはパースに失敗した場合にエラーを返す
    pub async fn execute(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
        let data = self.feed_repository.fetch(url).await?;
        let entries = self.feed_repository.parse(&data)?;

        info!("Parsed {} entries from {}", entries.len(), url);

        Ok(entries)
    }
}
