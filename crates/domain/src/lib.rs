//! # Todo Backend ドメイン層
//!
//! Todo エンティティと、その識別子・値オブジェクト・ドメインエラーを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティ、`TodoId`、`TodoTitle`
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{Todo, TodoId, TodoTitle};
//!
//! let title = TodoTitle::new("Buy milk").unwrap();
//! let todo = Todo::new(TodoId::new(), title, None);
//!
//! assert_eq!(todo.title().as_str(), "Buy milk");
//! assert!(TodoId::is_valid(&todo.id().to_string()));
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
