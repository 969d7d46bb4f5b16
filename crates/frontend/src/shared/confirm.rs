/// Подтверждение через `window.confirm`
///
/// Без окна (например, вне браузера) действие не подтверждается.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
