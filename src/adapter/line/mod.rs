//! LINE Adapter Modules
//!
//! LINE Messaging APIへのプッシュ配信

pub mod client;
pub mod models;
