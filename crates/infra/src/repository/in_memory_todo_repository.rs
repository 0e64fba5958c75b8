//! # インメモリ TodoRepository
//!
//! プロセス内の `Vec` に Todo を保持する実装。
//! `STORE_BACKEND=memory` での起動と、サービス層のテストで使用する。
//!
//! 一覧は挿入順で返す。プロセス終了とともにデータは失われる。

use std::sync::Arc;

use async_trait::async_trait;
use todo_domain::todo::{Todo, TodoId, TodoTitle};
use tokio::sync::RwLock;

use crate::{error::InfraError, repository::TodoRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持している件数を返す
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: &Todo) -> Result<(), InfraError> {
        let mut todos = self.todos.write().await;
        // 主キー制約の代わり
        if todos.iter().any(|t| t.id() == todo.id()) {
            return Err(InfraError::unexpected(format!(
                "duplicate key value violates unique constraint: id={}",
                todo.id()
            )));
        }
        todos.push(todo.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.todos.read().await.clone())
    }

    async fn replace(
        &self,
        id: &TodoId,
        title: Option<&TodoTitle>,
        description: Option<&str>,
    ) -> Result<Option<Todo>, InfraError> {
        let mut todos = self.todos.write().await;
        let Some(slot) = todos.iter_mut().find(|t| t.id() == id) else {
            return Ok(None);
        };

        let updated = slot
            .clone()
            .replaced(title.cloned(), description.map(str::to_string));
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let mut todos = self.todos.write().await;
        let Some(index) = todos.iter().position(|t| t.id() == id) else {
            return Ok(None);
        };
        Ok(Some(todos.remove(index)))
    }

    async fn ping(&self) -> Result<(), InfraError> {
        Ok(())
    }
}
