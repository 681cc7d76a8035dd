//! # Message Sender Trait
//!
//! メッセージ配信を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::DeliveryError;

/// メッセージ送信
///
/// 1回の呼び出しで1バッチを1リクエストとして送信する。
/// 本番ではLINEクライアント、テストではモックが実装する。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// バッチを送信
    ///
    /// # Arguments
    ///
    /// * `recipient` - 送信先ID
    /// * `messages` - 送信するメッセージ（順序を保持）
    ///
    /// # Errors
    ///
    /// 検証・通信・HTTPステータスのいずれかで失敗した場合に `DeliveryError` を返す
    async fn send(&self, recipient: &str, messages: &[String]) -> Result<(), DeliveryError>;
}
