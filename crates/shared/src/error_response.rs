//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - ワイヤ形式は `{"message": "..."}` 固定（クライアントとの互換性を維持）
//! - 検証エラーのメッセージはドメイン層のエラーが持つ。ここではストア起点の
//!   「見つからない」メッセージのみ定義する

use serde::{Deserialize, Serialize};

/// Todo が存在しない場合のメッセージ
pub const TODO_NOT_FOUND: &str = "Todo not found";

/// エラーレスポンス
///
/// 4xx / 5xx のすべてのレスポンスボディはこの形式になる。
///
/// ```
/// use todo_shared::ErrorResponse;
///
/// let error = ErrorResponse::new("Todo not found");
/// assert_eq!(error.message, "Todo not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
