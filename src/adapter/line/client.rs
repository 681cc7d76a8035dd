//! LINE Messaging API Client
//!
//! MessageSenderのLINE実装

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use super::models::LineMessages;
use crate::adapter::http::read_body_limited;
use crate::domain::errors::DeliveryError;
use crate::domain::repositories::message_sender::MessageSender;
use crate::domain::services::message_validation::MessageValidator;

/// エラー時に読み込むレスポンスボディの上限（4 KiB）
pub const MAX_ERROR_RESPONSE_SIZE: usize = 4 * 1024;

/// LINE Messaging APIのプッシュクライアント
pub struct LineClient {
    client: Client,
    api_url: String,
    access_token: String,
}

impl LineClient {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    ///
    /// * `client` - タイムアウト設定済みの共有HTTPクライアント
    /// * `api_url` - プッシュAPIのエンドポイント
    /// * `access_token` - チャネルアクセストークン
    pub fn new(client: Client, api_url: String, access_token: String) -> Self {
        Self {
            client,
            api_url,
            access_token,
        }
    }
}

#[async_trait]
impl MessageSender for LineClient {
    async fn send(&self, recipient: &str, messages: &[String]) -> Result<(), DeliveryError> {
        // 上限超過はリクエストを送る前に弾く
        MessageValidator::validate(messages)?;

        let payload = LineMessages::new(recipient, messages);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| DeliveryError::Encode { source: e.into() })?;

        let response = self
            .client
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.access_token)
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport { source: e.into() })?;

        let status = response.status();
        if status != StatusCode::OK {
            let (body, _) = read_body_limited(response, MAX_ERROR_RESPONSE_SIZE)
                .await
                .unwrap_or_default();
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!("Pushed {} messages to LINE", messages.len());

        Ok(())
    }
}
