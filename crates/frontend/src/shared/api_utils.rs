//! API utilities for frontend-backend communication

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Backend всегда слушает порт 3000 на том же хосте.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// POST JSON и разбор JSON-ответа
///
/// Любая ошибка (сеть, HTTP-статус, разбор) возвращается строкой для показа пользователю.
pub async fn post_json<Req, Resp>(path: &str, body: &Req) -> Result<Resp, String>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let response = gloo_net::http::Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json::<Resp>().await.map_err(|e| e.to_string())
}
