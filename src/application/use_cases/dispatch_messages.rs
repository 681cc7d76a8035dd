//! # Dispatch Messages Use Case
//!
//! メッセージのバッチ分割と逐次配信ユースケース

use std::sync::Arc;

use log::{debug, info};

use crate::domain::entities::message_batch::{MessageBatch, MAX_BATCH_SIZE};
use crate::domain::errors::DeliveryError;
use crate::domain::repositories::message_sender::MessageSender;

/// 配信結果のサマリー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// 送信したバッチ（リクエスト）の数
    pub batches_sent: usize,
    /// 送信したメッセージの数
    pub messages_sent: usize,
}

/// 全メッセージをバッチに分割して順番に送信
///
/// 最初の失敗で停止し、失敗したバッチの全体での範囲（1始まり）を
/// 付けた `DeliveryError::Batch` を返す。失敗後のバッチは送信しない。
/// 空の入力では一度も送信せずに成功する。
///
/// # Arguments
///
/// * `sender` - 送信を担当する実装
/// * `recipient` - 送信先ID
/// * `messages` - 送信するメッセージ
pub async fn dispatch_all<S: MessageSender + ?Sized>(
    sender: &S,
    recipient: &str,
    messages: &[String],
) -> Result<DispatchSummary, DeliveryError> {
    let batches = MessageBatch::split_by_size(messages, MAX_BATCH_SIZE);
    let total_batches = batches.len();
    let mut summary = DispatchSummary::default();

    for (i, batch) in batches.into_iter().enumerate() {
        debug!(
            "Sending batch {}/{} (messages {}-{})",
            i + 1,
            total_batches,
            batch.start(),
            batch.end()
        );

        sender
            .send(recipient, batch.messages())
            .await
            .map_err(|e| DeliveryError::Batch {
                start: batch.start(),
                end: batch.end(),
                source: Box::new(e),
            })?;

        summary.batches_sent += 1;
        summary.messages_sent += batch.len();
    }

    info!(
        "Dispatched {} messages in {} batches",
        summary.messages_sent, summary.batches_sent
    );

    Ok(summary)
}

/// メッセージ配信ユースケース
pub struct DispatchMessagesUseCase<S: MessageSender> {
    sender: Arc<S>,
}

impl<S: MessageSender> DispatchMessagesUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `sender` - メッセージ送信の実装
    pub fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    /// メッセージを配信
    ///
    /// # Errors
    ///
    /// いずれかのバッチの送信に失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        recipient: &str,
        messages: &[String],
    ) -> Result<DispatchSummary, DeliveryError> {
        dispatch_all(self.sender.as_ref(), recipient, messages).await
    }
}
