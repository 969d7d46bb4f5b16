use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::shared::config::Config;
use crate::usecases::u501_sync_with_banks::{SimulatedBankFeed, SyncExecutor};
use crate::{handlers, system};

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub sync_executor: Arc<SyncExecutor>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let feed = SimulatedBankFeed::new(config.bank_feed.clone());
        Self {
            sync_executor: Arc::new(SyncExecutor::new(Arc::new(feed))),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // U501 синхронизация с банками
        .route(
            "/api/banking/sync",
            post(handlers::u501_sync_with_banks::sync),
        )
        // Журнал событий
        .route(
            "/api/logs",
            get(handlers::logs::list_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::shared::logger::LogEntry;
    use contracts::usecases::u501_sync_with_banks::response::SyncResponse;
    use tower::ServiceExt;

    const TEST_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[bank_feed]
seed = 42
max_transactions_per_day = 2
lookback_days = 3
unavailable_banks = ["Offline Bank"]
"#;

    fn app() -> Router {
        let config = parse_config(TEST_CONFIG).unwrap();
        configure_routes(AppState::from_config(&config), &config.server.static_dir)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_sync_rejects_empty_request() {
        let response = app()
            .oneshot(json_request("POST", "/api/banking/sync", r#"{"accounts":[]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sync_returns_results_and_failures() {
        let body = r#"{"accounts":[
            {"bank_account_id":1,"bank_name":"Main Bank","account_number":"001","currency":"USD","since":null},
            {"bank_account_id":2,"bank_name":"Offline Bank","account_number":"002","currency":"EUR","since":"2024-01-01"}
        ]}"#;
        let response = app()
            .oneshot(json_request("POST", "/api/banking/sync", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let sync: SyncResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(sync.results.len(), 1);
        assert_eq!(sync.results[0].bank_account_id.0, 1);
        assert_eq!(sync.failures.len(), 1);
        assert_eq!(sync.failures[0].bank_account_id.0, 2);
    }

    #[tokio::test]
    async fn test_client_log_is_listed() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/logs",
                r#"{"source":"client","category":"routes-test","message":"hello"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/api/logs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let logs: Vec<LogEntry> = serde_json::from_slice(&bytes).unwrap();
        assert!(logs
            .iter()
            .any(|e| e.category == "routes-test" && e.message == "hello"));
    }

    #[tokio::test]
    async fn test_client_log_requires_category() {
        let response = app()
            .oneshot(json_request(
                "POST",
                "/api/logs",
                r#"{"source":"client","category":"  ","message":"x"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
