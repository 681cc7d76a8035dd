//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPクライアントやXMLパーサーに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（FeedEntry, MessageBatch）
//! - **errors**: エラー分類（FetchError, ParseError, ValidationError, DeliveryError）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（整形・検証）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
