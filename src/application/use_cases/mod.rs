//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **FetchNewsUseCase**: フィードの取得とパース
//! - **DispatchMessagesUseCase**: メッセージのバッチ配信

pub mod dispatch_messages;
pub mod fetch_news;
