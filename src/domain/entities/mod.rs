//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **FeedEntry**: フィードの1エントリ（タイトルとリンク）
//! - **MessageBatch**: 1リクエストで送信するメッセージのバリューオブジェクト

pub mod feed_entry;
pub mod message_batch;
