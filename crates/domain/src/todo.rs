//! # Todo
//!
//! タスクリストの唯一のエンティティ。
//!
//! ## 識別子の形式
//!
//! `TodoId` はドキュメントストアのオブジェクト ID と同じ 12 バイト値で、
//! 外部には 24 文字の 16 進文字列として現れる。
//!
//! ```text
//! | 0..4: UNIX 秒 (BE) | 4..9: プロセス固有乱数 | 9..12: カウンタ (BE) |
//! ```
//!
//! 先頭が生成時刻のため、ID の辞書順はおおむね作成順と一致する。
//! 一覧の「ストアの自然順」はこの性質に依存している。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{Todo, TodoId, TodoTitle};
//!
//! let todo = Todo::new(TodoId::new(), TodoTitle::new("Buy milk").unwrap(), None);
//! let updated = todo.clone().replaced(None, Some("2%".to_string()));
//!
//! assert_eq!(updated.id(), todo.id());
//! assert_eq!(updated.title().as_str(), "Buy milk");
//! assert_eq!(updated.description(), Some("2%"));
//! ```

use std::{
    fmt,
    str::FromStr,
    sync::{
        LazyLock,
        atomic::{AtomicU32, Ordering},
    },
};

use chrono::Utc;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DomainError;

// =========================================================================
// TodoId（識別子）
// =========================================================================

/// ID のバイト長
const ID_BYTES: usize = 12;

/// ID の 16 進文字列長
pub const ID_HEX_LENGTH: usize = ID_BYTES * 2;

/// カウンタ部は下位 24 ビットのみ使用する
const COUNTER_MASK: u32 = 0x00FF_FFFF;

/// プロセス起動時に一度だけ決まる乱数部
static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);

/// ID ごとにインクリメントするカウンタ（初期値はランダム）
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));

/// Todo の一意識別子
///
/// # 不変条件
///
/// - 12 バイト固定長
/// - 同一プロセス内で [`TodoId::new`] が返す値は互いに異なる
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId([u8; ID_BYTES]);

impl TodoId {
    /// 新しい ID を生成する
    pub fn new() -> Self {
        // UNIX 秒の下位 32 ビット（2106 年で一周する）
        let seconds = Utc::now().timestamp() as u32;
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// 文字列が ID の形式を満たすか判定する
    ///
    /// 24 文字の ASCII 16 進数（大文字・小文字どちらも可）のみ有効。
    /// 該当レコードが存在するかどうかは問わない。
    pub fn is_valid(value: &str) -> bool {
        value.len() == ID_HEX_LENGTH && value.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// 16 進文字列から ID を復元する
    ///
    /// 大文字は小文字に正規化される（バイト値として同一のため）。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(value) {
            return Err(DomainError::InvalidId {
                value: value.to_string(),
            });
        }

        let mut bytes = [0u8; ID_BYTES];
        for (byte, pair) in bytes.iter_mut().zip(value.as_bytes().chunks_exact(2)) {
            *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }

    /// 内部バイト列への参照を取得する
    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

/// 16 進数字 1 文字の値（`is_valid` 通過後にのみ呼ぶ）
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

impl fmt::Debug for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TodoId").field(&self.to_string()).finish()
    }
}

impl FromStr for TodoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// タイトル未入力時のメッセージ
const TITLE_REQUIRED: &str = "Title is required";

/// Todo のタイトル（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない
///
/// 前後の空白はトリムしない。空白のみのタイトルも有効として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("{_0}")]
#[serde(transparent)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(TITLE_REQUIRED.to_string()));
        }

        Ok(Self(value))
    }

    /// 未指定（`None`）も含めてタイトルを検証する
    pub fn from_optional(value: Option<String>) -> Result<Self, DomainError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(DomainError::Validation(TITLE_REQUIRED.to_string())),
        }
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
///
/// 識別子は生成後に変更されない。タイトルと説明は [`Todo::replaced`] で
/// まとめて置き換える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    description: Option<String>,
}

impl Todo {
    pub fn new(id: TodoId, title: TodoTitle, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
        }
    }

    /// タイトルと説明を置き換えた新しい状態を返す
    ///
    /// `title` が `None` の場合は既存のタイトルを維持する。
    /// `description` が `None` の場合、既存の説明は消える。
    pub fn replaced(self, title: Option<TodoTitle>, description: Option<String>) -> Self {
        Self {
            id: self.id,
            title: title.unwrap_or(self.title),
            description,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
