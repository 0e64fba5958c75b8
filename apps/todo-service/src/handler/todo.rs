//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /todos` - Todo 作成
//! - `GET /todos` - Todo 一覧
//! - `PUT /todos/{id}` - Todo 置き換え
//! - `DELETE /todos/{id}` - Todo 削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, Serialize};
use todo_domain::{
    DomainError,
    todo::{Todo, TodoId},
};

use crate::{
    error::TodoError,
    usecase::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// 数値・真偽値のタイトルと説明は文字列に変換して受け付ける。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title:       Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
}

/// Todo 置き換えリクエスト
///
/// `title` を省略した場合は保存済みのタイトルが維持される。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title:       Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
}

/// 文字列として扱えるスカラー値
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarText {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl From<ScalarText> for String {
    fn from(value: ScalarText) -> Self {
        match value {
            ScalarText::Text(s) => s,
            ScalarText::Integer(n) => n.to_string(),
            ScalarText::Unsigned(n) => n.to_string(),
            ScalarText::Float(n) => n.to_string(),
            ScalarText::Bool(b) => b.to_string(),
        }
    }
}

/// `null` は未指定と同じ扱い。オブジェクトと配列は拒否する
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<ScalarText>::deserialize(deserializer)?.map(String::from))
}

/// パスの ID を検証する
///
/// パスとして解釈できない値（不正な UTF-8 など）も ID 形式エラーとして扱う。
fn parse_path_id(path: Result<Path<String>, PathRejection>) -> Result<TodoId, TodoError> {
    let id = match path {
        Ok(Path(raw)) => TodoId::parse(&raw)?,
        Err(rejection) => {
            return Err(DomainError::InvalidId {
                value: rejection.body_text(),
            }
            .into());
        }
    };
    tracing::Span::current().record("id", tracing::field::display(&id));
    Ok(id)
}

/// Todo DTO
#[derive(Debug, Serialize)]
pub struct TodoDto {
    pub id:          String,
    pub title:       String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id:          todo.id().to_string(),
            title:       todo.title().to_string(),
            description: todo.description().map(str::to_string),
        }
    }
}

// --- ハンドラ ---

/// POST /todos
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(req) = payload?;

    let todo = state
        .usecase
        .create_todo(CreateTodoInput {
            title:       req.title,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TodoDto::from(todo))))
}

/// GET /todos
///
/// 0 件の場合も 200 で空配列を返す。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.into_iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// PUT /todos/{id}
///
/// ID 形式 → ボディ → タイトル → 存在確認の順に検証する。
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let id = parse_path_id(path)?;
    let Json(req) = payload?;

    let todo = state
        .usecase
        .update_todo(UpdateTodoInput {
            id,
            title: req.title,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::OK, Json(TodoDto::from(todo))))
}

/// DELETE /todos/{id}
#[tracing::instrument(skip_all, fields(id = tracing::field::Empty))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let id = parse_path_id(path)?;

    state.usecase.delete_todo(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
