//! Configuration
//!
//! 環境変数からアプリケーション設定を読み込む

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use thiserror::Error;

pub const DEFAULT_LINE_API_URL: &str = "https://api.line.me/v2/bot/message/push";
pub const DEFAULT_RSS_URL: &str = "https://hnrss.org/frontpage";

/// 設定の読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
}

/// アプリケーション設定
#[derive(Clone)]
pub struct Config {
    pub line_access_token: String,
    pub target_user_id: String,
    pub line_api_url: String,
    pub rss_url: String,
}

impl Config {
    /// プロセスの環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む
    ///
    /// 必須項目は `LINE_ACCESS_TOKEN`、`TARGET_USER_ID` の順にチェックする。
    /// 空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let line_access_token =
            get("LINE_ACCESS_TOKEN").ok_or(ConfigError::Missing("LINE_ACCESS_TOKEN"))?;
        let target_user_id =
            get("TARGET_USER_ID").ok_or(ConfigError::Missing("TARGET_USER_ID"))?;

        let line_api_url =
            get("LINE_API_URL").unwrap_or_else(|| DEFAULT_LINE_API_URL.to_string());
        let rss_url = get("RSS_URL").unwrap_or_else(|| DEFAULT_RSS_URL.to_string());

        Ok(Self {
            line_access_token,
            target_user_id,
            line_api_url,
            rss_url,
        })
    }

    /// ログ表示用にマスクしたトークン
    pub fn masked_token(&self) -> String {
        mask_token(&self.line_access_token)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config{{LineAPIURL: {:?}, TargetUserID: {:?}, RSSURL: {:?}, LineAccessToken: {:?}}}",
            self.line_api_url,
            self.target_user_id,
            self.rss_url,
            self.masked_token()
        )
    }
}

// Debug出力にもトークンを出さない
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// 5文字以上なら先頭2文字と末尾2文字だけ残す
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// .envファイルを読み込んで環境変数に反映する
///
/// 既に設定されている環境変数は上書きしない。
pub fn load_env_file(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(path);
    let path = PathBuf::from(expanded.as_ref());

    dotenvy::from_path(&path)
        .with_context(|| format!("Failed to load env file: {}", path.display()))?;

    info!("Loaded environment from {}", path.display());

    Ok(path)
}
