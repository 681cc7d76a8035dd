//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// ニュースフィードをLINEに配信するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "newsline")]
#[command(about = "Push news feed entries to LINE", long_about = None)]
pub struct Args {
    /// Dry run mode - fetch and format, but don't send
    #[arg(long)]
    pub dry_run: bool,

    /// Load environment variables from this file before reading config
    #[arg(long)]
    pub env_file: Option<String>,
}
