//! # MessageBatch Value Object
//!
//! 1回の配信リクエストで送るメッセージのまとまり

/// 1リクエストあたりの最大メッセージ数（LINE Messaging APIの制限）
pub const MAX_BATCH_SIZE: usize = 5;

/// メッセージバッチ
///
/// 全メッセージ列の連続した一部分を借用し、元の列での位置を保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBatch<'a> {
    offset: usize,
    messages: &'a [String],
}

impl<'a> MessageBatch<'a> {
    /// 新しいバッチを作成
    ///
    /// # Arguments
    ///
    /// * `offset` - 全メッセージ列における先頭の0始まりの位置
    /// * `messages` - バッチに含めるメッセージ
    pub fn new(offset: usize, messages: &'a [String]) -> Self {
        Self { offset, messages }
    }

    /// メッセージ列をサイズごとのバッチに分割
    ///
    /// 順序を保ったまま先頭から `batch_size` 件ずつ切り出す。
    /// 最後のバッチだけが `batch_size` 未満になり得る。
    /// 空の列からはバッチを1つも作らない。
    ///
    /// # Arguments
    ///
    /// * `messages` - 分割対象のメッセージ列
    /// * `batch_size` - 各バッチの最大件数（0の場合は分割しない）
    ///
    /// # 例
    ///
    /// ```
    /// use newsline::domain::entities::message_batch::MessageBatch;
    ///
    /// let messages: Vec<String> = (1..=7).map(|i| format!("Message {}", i)).collect();
    /// let batches = MessageBatch::split_by_size(&messages, 5);
    ///
    /// assert_eq!(batches.len(), 2);
    /// assert_eq!((batches[0].start(), batches[0].end()), (1, 5));
    /// assert_eq!((batches[1].start(), batches[1].end()), (6, 7));
    /// ```
    pub fn split_by_size(messages: &'a [String], batch_size: usize) -> Vec<MessageBatch<'a>> {
        if messages.is_empty() {
            return Vec::new();
        }

        if batch_size == 0 {
            return vec![MessageBatch::new(0, messages)];
        }

        messages
            .chunks(batch_size)
            .enumerate()
            .map(|(i, chunk)| MessageBatch::new(i * batch_size, chunk))
            .collect()
    }

    /// バッチ内のメッセージ数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// メッセージへの参照を返す
    pub fn messages(&self) -> &'a [String] {
        self.messages
    }

    /// 全体での1始まりの開始インデックス
    pub fn start(&self) -> usize {
        self.offset + 1
    }

    /// 全体での1始まりの終了インデックス（含む）
    pub fn end(&self) -> usize {
        self.offset + self.messages.len()
    }
}
