//! Feed Parser
//!
//! RSSのXMLをフィードエントリに変換

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::entities::feed_entry::FeedEntry;
use crate::domain::errors::ParseError;

use super::models::{ItemField, RssItem};

// 要素パス上の深さ: ルート=1, channel=2, item=3, title/link=4
const CHANNEL_DEPTH: usize = 2;
const ITEM_DEPTH: usize = 3;
const FIELD_DEPTH: usize = 4;

fn in_channel(path: &[Vec<u8>]) -> bool {
    path.len() == CHANNEL_DEPTH && path[1] == b"channel"
}

fn in_item(path: &[Vec<u8>]) -> bool {
    path.len() == ITEM_DEPTH && path[1] == b"channel" && path[2] == b"item"
}

/// XMLバイト列をパースして文書順のエントリを返す
///
/// channelやitemが無い場合は空のリストを返す。複数のchannelがあれば
/// 全てのitemを連結する。テキストはトリムせずそのまま保持し、
/// title/link内の入れ子要素のテキストは読み飛ばす。
pub fn parse_feed(data: &[u8]) -> Result<Vec<FeedEntry>, ParseError> {
    let mut reader = Reader::from_reader(data);

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut item: Option<RssItem> = None;
    let mut field: Option<(ItemField, String)> = None;
    let mut entries: Vec<FeedEntry> = Vec::new();

    loop {
        match reader.read_event().map_err(ParseError::new)? {
            Event::Start(start) => {
                let name = start.name().as_ref().to_vec();
                if in_channel(&path) && name == b"item" {
                    item = Some(RssItem::default());
                } else if in_item(&path) {
                    field = ItemField::from_name(&name).map(|f| (f, String::new()));
                }
                path.push(name);
            }
            Event::Empty(empty) => {
                let name = empty.name();
                if path.is_empty() {
                    // <rss/>
                    return Ok(entries);
                }
                if in_channel(&path) && name.as_ref() == b"item" {
                    entries.push(RssItem::default().into());
                } else if in_item(&path) {
                    let target = ItemField::from_name(name.as_ref());
                    if let (Some(item), Some(f)) = (item.as_mut(), target) {
                        item.set(f, String::new());
                    }
                }
            }
            Event::Text(text) => {
                if let Some((_, value)) = field.as_mut() {
                    if path.len() == FIELD_DEPTH {
                        value.push_str(&text.unescape().map_err(ParseError::new)?);
                    }
                }
            }
            Event::CData(cdata) => {
                if let Some((_, value)) = field.as_mut() {
                    if path.len() == FIELD_DEPTH {
                        let raw = cdata.into_inner();
                        value.push_str(std::str::from_utf8(&raw).map_err(ParseError::new)?);
                    }
                }
            }
            Event::End(_) => {
                // 開始・終了タグの対応はReaderが検証済み
                match path.len() {
                    FIELD_DEPTH => {
                        if let (Some(item), Some((f, value))) = (item.as_mut(), field.take()) {
                            item.set(f, value);
                        }
                    }
                    ITEM_DEPTH => {
                        if let Some(item) = item.take() {
                            entries.push(item.into());
                        }
                    }
                    _ => {}
                }
                path.pop();
                if path.is_empty() {
                    // ルート要素の後ろは読まない
                    return Ok(entries);
                }
            }
            Event::Eof => {
                return Err(match path.last() {
                    Some(open) => ParseError::new(format!(
                        "unexpected end of document inside <{}>",
                        String::from_utf8_lossy(open)
                    )),
                    None => ParseError::new("no root element"),
                });
            }
            _ => {}
        }
    }
}
