//! # Todo Service ライブラリ
//!
//! Todo Service のルーター、ハンドラ、ユースケースを公開する。
//! `main` と統合テストは [`app::build_app`] で同じルーターを組み立てる。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
