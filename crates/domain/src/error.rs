//! # ドメイン層エラー定義
//!
//! 入力値がドメインの不変条件を満たさない場合のエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須フィールドの欠落など |
//! | `InvalidId` | 400 Bad Request | 識別子の形式不正 |
//!
//! `Display` の出力はそのままレスポンスの `message` になるため、
//! 接頭辞を付けずにメッセージ本文のみを出力する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 例: タイトルが未入力
    #[error("{0}")]
    Validation(String),

    /// 識別子の形式が不正
    ///
    /// 存在確認ではなく構文チェックの失敗。`value` は受け取った文字列。
    #[error("Invalid ID format")]
    InvalidId {
        value: String,
    },
}
