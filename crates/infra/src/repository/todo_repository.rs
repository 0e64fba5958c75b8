//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **RETURNING 句**: 更新・削除は `RETURNING` で結果を受け取り、
//!   検索と変更を 1 往復で行う
//! - **自然順**: 一覧は ID 順（= おおむね作成順）で返す

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::todo::{Todo, TodoId, TodoTitle};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入する
    async fn insert(&self, todo: &Todo) -> Result<(), InfraError>;

    /// 全 Todo をストアの自然順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で検索し、タイトルと説明を置き換える
    ///
    /// `title` が `None` の場合は保存済みのタイトルを維持し、説明は常に置き換える。
    /// 置き換え後の Todo を返す。該当がなければ `None`。
    async fn replace(
        &self,
        id: &TodoId,
        title: Option<&TodoTitle>,
        description: Option<&str>,
    ) -> Result<Option<Todo>, InfraError>;

    /// ID で検索して削除する
    ///
    /// 削除した Todo を返す。該当がなければ `None`。
    async fn delete(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// ストアへの疎通を確認する（readiness 用）
    async fn ping(&self) -> Result<(), InfraError>;
}

/// `todos` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:          String,
    title:       String,
    description: Option<String>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = InfraError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        // DB の主キーと CHECK 制約により通常は失敗しないが、手動で書き換えられた行に備える
        let id = TodoId::parse(&row.id)
            .map_err(|e| InfraError::unexpected(format!("{e}: {}", row.id)))?;
        let title = TodoTitle::new(row.title)
            .map_err(|e| InfraError::unexpected(format!("{e} (id={id})")))?;
        Ok(Todo::new(id, title, row.description))
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
    async fn insert(&self, todo: &Todo) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, title, description)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(todo.id().to_string())
        .bind(todo.title().as_str())
        .bind(todo.description())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn replace(
        &self,
        id: &TodoId,
        title: Option<&TodoTitle>,
        description: Option<&str>,
    ) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET title = COALESCE($2, title), description = $3
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(id.to_string())
        .bind(title.map(TodoTitle::as_str))
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            DELETE FROM todos
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Todo::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
