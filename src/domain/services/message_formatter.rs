//! # Message Formatter Service
//!
//! フィードエントリを送信用メッセージに整形するサービス

use crate::domain::entities::feed_entry::FeedEntry;

/// メッセージ整形サービス
pub struct MessageFormatter;

impl MessageFormatter {
    /// エントリを `"{番号}. {タイトル}\n{リンク}"` 形式に変換
    ///
    /// 番号は1始まり。エスケープや切り詰めは行わない。
    ///
    /// # 例
    ///
    /// ```
    /// use newsline::domain::entities::feed_entry::FeedEntry;
    /// use newsline::domain::services::message_formatter::MessageFormatter;
    ///
    /// let entries = vec![FeedEntry::new("A", "http://x")];
    /// assert_eq!(MessageFormatter::format(&entries), vec!["1. A\nhttp://x".to_string()]);
    /// assert!(MessageFormatter::format(&[]).is_empty());
    /// ```
    pub fn format(entries: &[FeedEntry]) -> Vec<String> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}\n{}", i + 1, entry.title, entry.link))
            .collect()
    }
}
