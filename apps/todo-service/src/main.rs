//! # Todo Service サーバー
//!
//! Todo の作成・一覧・置き換え・削除を提供する HTTP サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `STORE_BACKEND` | No | `postgres` または `memory`（デフォルト: `postgres`） |
//! | `DATABASE_URL` | No | PostgreSQL 接続 URL（デフォルト: `postgres://postgres@127.0.0.1:5432/todos`） |
//! | `LOG_FORMAT` | No | `pretty` または `json`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todo=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（PostgreSQL なし）
//! STORE_BACKEND=memory cargo run -p todo-service
//!
//! # 本番環境
//! DATABASE_URL=postgres://... LOG_FORMAT=json cargo run -p todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todo_infra::{
    db,
    repository::{InMemoryTodoRepository, PostgresTodoRepository, TodoRepository},
};
use todo_service::{
    app::build_app,
    config::{StoreBackend, TodoConfig},
};
use todo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env("todo-service"));

    let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let todo_repository = connect_store(&config).await?;
    let app = build_app(todo_repository);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} にバインドできませんでした"))?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// 設定されたバックエンドに接続し、リポジトリを返す
///
/// PostgreSQL の場合は接続とマイグレーションに失敗した時点で起動を中止する。
async fn connect_store(config: &TodoConfig) -> anyhow::Result<Arc<dyn TodoRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = db::create_pool(&config.database_url)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            db::run_migrations(&pool)
                .await
                .context("マイグレーションの適用に失敗しました")?;
            tracing::info!("マイグレーションを適用しました");

            Ok(Arc::new(PostgresTodoRepository::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("インメモリストアで起動します（再起動でデータは消えます）");
            Ok(Arc::new(InMemoryTodoRepository::new()))
        }
    }
}

/// Ctrl+C を待つ
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シグナルハンドラの登録に失敗しました");
    }
    tracing::info!("シャットダウンします");
}
