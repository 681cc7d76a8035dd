//! Feed Adapter Modules
//!
//! RSSフィードの取得とパース

pub mod client;
pub mod models;
pub mod parser;
