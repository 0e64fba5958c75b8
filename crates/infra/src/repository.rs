//! # リポジトリ実装
//!
//! Todo の永続化トレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **単一呼び出し**: 各操作はストアへの 1 回のアトミックな呼び出しで完結する
//! - **存在しない場合は `None`**: 更新・削除の対象がなければエラーではなく `None` を返す。
//!   404 への変換はサービス層の責務
//! - **テスタビリティ**: トレイト経由で差し替え可能

pub mod in_memory_todo_repository;
pub mod todo_repository;

pub use in_memory_todo_repository::InMemoryTodoRepository;
pub use todo_repository::{PostgresTodoRepository, TodoRepository};
