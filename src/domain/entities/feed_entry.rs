//! # FeedEntry Entity
//!
//! フィードエントリのビジネス表現

/// フィードエントリ
///
/// タイトルやリンクが空でもエラーにはしない
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
}

impl FeedEntry {
    /// 新しいフィードエントリを作成
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_entry_new() {
        let entry = FeedEntry::new("Show HN: A thing", "https://example.com/thing");
        assert_eq!(entry.title, "Show HN: A thing");
        assert_eq!(entry.link, "https://example.com/thing");
    }

    #[test]
    fn test_feed_entry_default_is_empty() {
        let entry = FeedEntry::default();
        assert!(entry.title.is_empty());
        assert!(entry.link.is_empty());
    }
}
