use crate::domain::entities::feed_entry::FeedEntry;

// RSS document: <rss><channel><item><title/><link/></item>...</channel></rss>
// ルート要素名は検証しない。未知の要素・属性は無視する。

/// `<item>` 直下のうち読み取る子要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Title,
    Link,
}

impl ItemField {
    /// 修飾名が完全一致する要素のみ対象（`atom:link` などは無視）
    pub fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Self::Title),
            b"link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// パース途中の `<item>`
#[derive(Debug, Default)]
pub struct RssItem {
    pub title: String,
    pub link: String,
}

impl RssItem {
    /// 同じ要素が繰り返された場合は最後の値が残る
    pub fn set(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Title => self.title = value,
            ItemField::Link => self.link = value,
        }
    }
}

impl From<RssItem> for FeedEntry {
    fn from(item: RssItem) -> Self {
        FeedEntry::new(item.title, item.link)
    }
}
