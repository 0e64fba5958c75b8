//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `BadRequest` | 400 |
//! | `NotFound` | 404 |
//! | `Database` | 500（ストアのエラーメッセージをそのまま返す） |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// 不正なリクエスト（必須項目の欠落、ID 形式不正、JSON 不正）
    #[error("{0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("{0}")]
    NotFound(String),

    /// ストアエラー
    #[error("{0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for TodoError {
    fn from(error: DomainError) -> Self {
        Self::BadRequest(error.to_string())
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl TodoError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            tracing::error!(
                error.message = %e,
                error.kind = ?e.kind(),
                span_trace = %e.span_trace(),
                "ストアエラー"
            );
        }

        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
