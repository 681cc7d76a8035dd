//! # Feed Repository Trait
//!
//! ニュースフィードの取得とパースを抽象化

use async_trait::async_trait;

use crate::domain::entities::feed_entry::FeedEntry;
use crate::domain::errors::{FetchError, ParseError};

/// フィードリポジトリ
///
/// フィードの取得とパースを担当するリポジトリ
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// フィードを取得する
    ///
    /// # Arguments
    ///
    /// * `url` - フィードのURL
    ///
    /// # Returns
    ///
    /// レスポンスボディの生バイト列
    ///
    /// # Errors
    ///
    /// 通信エラーや2xx以外のステータスの場合に `FetchError` を返す
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// フィードをパースする
    ///
    /// # Arguments
    ///
    /// * `data` - フィードの生バイト列
    ///
    /// # Returns
    ///
    /// 文書順のエントリ
    fn parse(&self, data: &[u8]) -> Result<Vec<FeedEntry>, ParseError>;
}
