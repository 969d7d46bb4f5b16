use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в tracing метод, путь, статус и длительность.
/// Ответы с ошибкой (4xx/5xx) логируются уровнем WARN.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status >= 400 {
        tracing::warn!(%method, path = %path, status, elapsed_ms, "request");
    } else {
        tracing::info!(%method, path = %path, status, elapsed_ms, "request");
    }

    response
}
