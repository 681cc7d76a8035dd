//! Newsline - News Feed to LINE Pusher
//!
//! ニュースフィードを取得してLINEに配信

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::{Context, Result};
use clap::Parser;

use newsline::adapter::config::{load_env_file, Config};
use newsline::driver::{Args, NewsPushWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(path) = &args.env_file {
        load_env_file(path)?;
    }

    // Load configuration from environment variables
    let config = Config::from_env().context("Failed to load config")?;

    // Create workflow with injected dependencies
    let workflow = NewsPushWorkflow::new(config)?;

    workflow.execute(&args).await
}
