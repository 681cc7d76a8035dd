//! # Domain Services
//!
//! エンティティに属さないビジネスルール
//!
//! - **MessageFormatter**: フィードエントリを送信用テキストに整形
//! - **MessageValidator**: 送信前のメッセージ長の検証

pub mod message_formatter;
pub mod message_validation;
