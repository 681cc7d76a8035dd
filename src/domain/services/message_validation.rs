//! # Message Validation Service
//!
//! 送信前のメッセージ長検証

use crate::domain::errors::ValidationError;

/// 1メッセージの最大長（LINE Messaging APIのテキスト上限）
///
/// UTF-8のバイト数で数える。
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// メッセージ検証サービス
pub struct MessageValidator;

impl MessageValidator {
    /// バッチ内の全メッセージが上限以内か検証
    ///
    /// # Arguments
    ///
    /// * `messages` - 検証対象のメッセージ
    ///
    /// # Errors
    ///
    /// 最初に上限を超えたメッセージの1始まりのインデックスを含む `ValidationError`
    pub fn validate(messages: &[String]) -> Result<(), ValidationError> {
        match messages
            .iter()
            .enumerate()
            .find(|(_, msg)| msg.len() > MAX_MESSAGE_LENGTH)
        {
            Some((i, msg)) => Err(ValidationError {
                index: i + 1,
                limit: MAX_MESSAGE_LENGTH,
                length: msg.len(),
            }),
            None => Ok(()),
        }
    }
}
