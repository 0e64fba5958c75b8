//! # ルーター構築
//!
//! リポジトリを受け取り、State → Router の順に組み立てる。
//! `main` と統合テストの双方から使用する。

use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post, put},
};
use todo_infra::repository::TodoRepository;
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ReadinessState,
        TodoState,
        create_todo,
        delete_todo,
        health_check,
        list_todos,
        readiness_check,
        update_todo,
    },
    usecase::TodoUseCaseImpl,
};

/// DI とルーター定義を行う
pub fn build_app(todo_repository: Arc<dyn TodoRepository>) -> Router {
    let readiness_state = Arc::new(ReadinessState {
        todo_repository: todo_repository.clone(),
    });
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(todo_state)
        // 全オリジンからのアクセスを許可する
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        // 下に書いたものが外側。SetRequestIdLayer で採番した ID を
        // TraceLayer のスパンに載せ、PropagateRequestIdLayer でレスポンスに返す
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
