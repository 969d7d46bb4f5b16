//! UseCase u501: синхронизация банковских счетов с банками
//!
//! Клиент отправляет список счетов, сервер возвращает операции из банковской
//! выписки. Клиент сам вливает их в свои списки (`apply::apply_sync`).

pub mod apply;
pub mod request;
pub mod response;
