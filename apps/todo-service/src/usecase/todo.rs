//! # Todo ユースケース
//!
//! Todo の作成・一覧・置き換え・削除を扱う。

use std::sync::Arc;

use todo_domain::todo::{Todo, TodoId, TodoTitle};
use todo_infra::repository::TodoRepository;
use todo_shared::error_response::TODO_NOT_FOUND;

use crate::error::TodoError;

/// Todo 作成の入力
#[derive(Debug, Clone, Default)]
pub struct CreateTodoInput {
    pub title:       Option<String>,
    pub description: Option<String>,
}

/// Todo 置き換えの入力
///
/// `id` はハンドラでパス文字列から検証済み。
/// `title` が `None` の場合は保存済みのタイトルを維持する。
/// `description` が `None` の場合、保存済みの説明は消去される。
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
    pub id:          TodoId,
    pub title:       Option<String>,
    pub description: Option<String>,
}

/// Todo ユースケースの実装
pub struct TodoUseCaseImpl {
    todo_repo: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }

    /// Todo を作成する
    ///
    /// タイトルが未指定または空文字列の場合はストアに触れずに失敗する。
    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, TodoError> {
        let title = TodoTitle::from_optional(input.title)?;
        let todo = Todo::new(TodoId::new(), title, input.description);

        self.todo_repo.insert(&todo).await?;

        tracing::info!(id = %todo.id(), "Todo を作成しました");
        Ok(todo)
    }

    /// 全 Todo を取得する
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.todo_repo.find_all().await?)
    }

    /// Todo のタイトルと説明を置き換える
    ///
    /// 空文字列のタイトルはストアに触れずに失敗する。
    pub async fn update_todo(&self, input: UpdateTodoInput) -> Result<Todo, TodoError> {
        let title = input.title.map(TodoTitle::new).transpose()?;

        let updated = self
            .todo_repo
            .replace(&input.id, title.as_ref(), input.description.as_deref())
            .await?
            .ok_or_else(|| TodoError::NotFound(TODO_NOT_FOUND.to_string()))?;

        tracing::info!(id = %updated.id(), "Todo を更新しました");
        Ok(updated)
    }

    /// Todo を削除する
    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), TodoError> {
        self.todo_repo
            .delete(id)
            .await?
            .ok_or_else(|| TodoError::NotFound(TODO_NOT_FOUND.to_string()))?;

        tracing::info!(%id, "Todo を削除しました");
        Ok(())
    }
}
