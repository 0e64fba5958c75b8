//! # ヘルスチェックハンドラ
//!
//! Todo Service の稼働状態を確認するためのエンドポイント。
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（ストアへの疎通を確認）
//!
//! レスポンス型は [`todo_shared::HealthResponse`] / [`todo_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use todo_infra::repository::TodoRepository;
use todo_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// ストア疎通確認のタイムアウト
const STORE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub todo_repository: Arc<dyn TodoRepository>,
}

/// Readiness Check エンドポイント
///
/// ストアに ping し、成功 → 200、失敗またはタイムアウト → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let store = check_store(state.todo_repository.as_ref()).await;

    let response = ReadinessResponse::from_checks(HashMap::from([("store".to_string(), store)]));
    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

async fn check_store(repo: &dyn TodoRepository) -> CheckStatus {
    match tokio::time::timeout(STORE_CHECK_TIMEOUT, repo.ping()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: store ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: store check timed out");
            CheckStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::Request,
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use todo_domain::todo::{Todo, TodoId, TodoTitle};
    use todo_infra::{InfraError, repository::InMemoryTodoRepository};
    use tower::ServiceExt;

    use super::*;

    /// ping だけが失敗するリポジトリ
    struct UnreachableTodoRepository;

    #[async_trait]
    impl TodoRepository for UnreachableTodoRepository {
        async fn insert(&self, _todo: &Todo) -> Result<(), InfraError> {
            Ok(())
        }

        async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
            Ok(Vec::new())
        }

        async fn replace(
            &self,
            _id: &TodoId,
            _title: Option<&TodoTitle>,
            _description: Option<&str>,
        ) -> Result<Option<Todo>, InfraError> {
            Ok(None)
        }

        async fn delete(&self, _id: &TodoId) -> Result<Option<Todo>, InfraError> {
            Ok(None)
        }

        async fn ping(&self) -> Result<(), InfraError> {
            Err(InfraError::unexpected("connection refused"))
        }
    }

    fn create_test_app(repo: Arc<dyn TodoRepository>) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .with_state(Arc::new(ReadinessState {
                todo_repository: repo,
            }))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_healthは常にhealthyを返す() {
        let app = create_test_app(Arc::new(UnreachableTodoRepository));

        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "healthy", "version": env!("CARGO_PKG_VERSION") })
        );
    }

    #[tokio::test]
    async fn test_ストアに疎通できればreadyを返す() {
        let app = create_test_app(Arc::new(InMemoryTodoRepository::new()));

        let (status, body) = get_json(app, "/health/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ready", "checks": { "store": "ok" } }));
    }

    #[tokio::test]
    async fn test_ストアに疎通できなければ503でnot_readyを返す() {
        let app = create_test_app(Arc::new(UnreachableTodoRepository));

        let (status, body) = get_json(app, "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({ "status": "not_ready", "checks": { "store": "error" } })
        );
    }
}
