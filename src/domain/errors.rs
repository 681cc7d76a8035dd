//! # Domain Errors
//!
//! フィード取得・パース・配信のエラー分類
//!
//! 外部クレートのエラーは `BoxError` として保持し、Domain層が
//! HTTPクライアントやXMLパーサーに依存しないようにしています。

use thiserror::Error;

/// 下位レイヤーのエラー原因
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// フィード取得エラー
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS解決失敗、接続拒否、タイムアウトなどの通信エラー
    #[error("failed to fetch news from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// 2xx以外のHTTPステータス
    #[error("unexpected status code: {status}")]
    Status { status: u16 },

    /// レスポンスボディの読み込み失敗
    #[error("failed to read response body: {source}")]
    Body {
        #[source]
        source: BoxError,
    },
}

/// フィードのXMLパースエラー
#[derive(Debug, Error)]
#[error("error parsing XML: {source}")]
pub struct ParseError {
    #[source]
    source: BoxError,
}

impl ParseError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// フィード取得からパースまでのエラー
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// メッセージ長の検証エラー
///
/// ネットワーク呼び出しの前に検出されます。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("message {index} exceeds LINE's {limit} character limit (has {length} characters)")]
pub struct ValidationError {
    /// バッチ内での1始まりのインデックス
    pub index: usize,
    /// 上限値
    pub limit: usize,
    /// 実際の長さ
    pub length: usize,
}

/// 配信エラー
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// リクエストボディのJSONエンコード失敗
    #[error("failed to marshal JSON: {source}")]
    Encode {
        #[source]
        source: BoxError,
    },

    /// 通信エラー
    #[error("failed to send request: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    /// 200以外のHTTPステータス（ボディは診断用に切り詰め済み）
    #[error("LINE API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// バッチ単位の失敗（全体での1始まりの開始・終了インデックス）
    #[error("failed to send batch {start}-{end}: {source}")]
    Batch {
        start: usize,
        end: usize,
        #[source]
        source: Box<DeliveryError>,
    },
}

impl DeliveryError {
    /// 失敗原因のHTTPステータスコード（バッチのラップを辿る）
    pub fn status(&self) -> Option<u16> {
        match self {
            DeliveryError::Status { status, .. } => Some(*status),
            DeliveryError::Batch { source, .. } => source.status(),
            _ => None,
        }
    }
}
