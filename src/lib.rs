//! # Newsline
//!
//! ニュースフィード（Hacker Newsなど）を取得し、LINEにプッシュ配信するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、エラー分類、Repository trait、整形・検証ルール
//! - **Application層**: フィード取得とバッチ配信のユースケース
//! - **Adapter層**: 外部システムとの統合（RSSフィード, LINE Messaging API, 環境変数）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
