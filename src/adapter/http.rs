//! HTTP Client Helpers
//!
//! プロセス全体で共有するHTTPクライアントとボディの上限付き読み込み

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;

/// フィード取得・配信の両方に適用するリクエストタイムアウト
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// タイムアウト設定済みのHTTPクライアントを作成
///
/// プロセスごとに1つ作成し、各アダプターに明示的に渡す。
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .context("Failed to create HTTP client")
}

/// レスポンスボディを最大 `limit` バイトまで読み込む
///
/// 上限を超えた分は読み捨てる（エラーにはしない）。
/// 戻り値の2つ目は切り詰めが発生したかどうか。
pub async fn read_body_limited(
    mut response: Response,
    limit: usize,
) -> reqwest::Result<(Vec<u8>, bool)> {
    let mut body = Vec::new();

    while let Some(chunk) = response.chunk().await? {
        let remaining = limit - body.len();
        if chunk.len() > remaining {
            body.extend_from_slice(&chunk[..remaining]);
            return Ok((body, true));
        }
        body.extend_from_slice(&chunk);
    }

    Ok((body, false))
}
