//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::feed::client::HttpFeedRepository;
use crate::adapter::http::build_http_client;
use crate::adapter::line::client::LineClient;
use crate::application::use_cases::dispatch_messages::DispatchMessagesUseCase;
use crate::application::use_cases::fetch_news::FetchNewsUseCase;
use crate::domain::services::message_formatter::MessageFormatter;

use super::cli::Args;

/// News Push Workflow
///
/// フィード取得 → 整形 → バッチ配信 を1回実行する
pub struct NewsPushWorkflow {
    config: Config,
    fetch_use_case: FetchNewsUseCase<HttpFeedRepository>,
    dispatch_use_case: DispatchMessagesUseCase<LineClient>,
}

impl NewsPushWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        // 共有HTTPクライアント（30秒タイムアウト）
        let http_client = build_http_client()?;

        let feed_repo = Arc::new(HttpFeedRepository::new(http_client.clone()));
        let line_client = Arc::new(LineClient::new(
            http_client,
            config.line_api_url.clone(),
            config.line_access_token.clone(),
        ));

        Ok(Self {
            config,
            fetch_use_case: FetchNewsUseCase::new(feed_repo),
            dispatch_use_case: DispatchMessagesUseCase::new(line_client),
        })
    }

    /// Execute the push workflow
    pub async fn execute(&self, args: &Args) -> Result<()> {
        info!("Starting news push...");
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using configuration:");
        println!("  Feed: {}", self.config.rss_url);
        println!("  LINE API: {}", self.config.line_api_url);
        println!("  Recipient: {}", self.config.target_user_id);
        println!("  Token: {}", self.config.masked_token());

        let entries = self
            .fetch_use_case
            .execute(&self.config.rss_url)
            .await
            .context("Failed to get news")?;
        println!("✓ Fetched {} entries", entries.len());

        let messages = MessageFormatter::format(&entries);

        if messages.is_empty() {
            println!("No entries to send. Exiting.");
            return Ok(());
        }

        if args.dry_run {
            println!("✓ Dry-run mode (not actually sending)");
            println!("  Would send {} messages:", messages.len());
            for message in &messages {
                println!("    - {}", message.replace('\n', " | "));
            }
            return Ok(());
        }

        let summary = self
            .dispatch_use_case
            .execute(&self.config.target_user_id, &messages)
            .await
            .context("Failed to send LINE message")?;

        println!(
            "✓ Sent {} messages in {} batches",
            summary.messages_sent, summary.batches_sent
        );
        println!("✓ Successfully sent messages");

        Ok(())
    }
}
