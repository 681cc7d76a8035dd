//! Adapter Layer
//!
//! 外部システム（RSSフィード, LINE Messaging API, 環境変数）との統合

pub mod config;
pub mod feed;
pub mod http;
pub mod line;
