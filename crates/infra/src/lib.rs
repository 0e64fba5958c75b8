//! # Todo Backend インフラ層
//!
//! Todo の永続化を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトと、その具体実装（PostgreSQL / インメモリ）を提供する。
//! サービス層はトレイトオブジェクト経由でのみ永続化を行い、
//! どのバックエンドを使うかは起動時に決まる。
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続プールとマイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::PostgresTodoRepository};
//!
//! async fn setup() -> Result<(), todo_infra::InfraError> {
//!     let pool = db::create_pool("postgres://localhost/todos").await?;
//!     db::run_migrations(&pool).await?;
//!     let repository = PostgresTodoRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
