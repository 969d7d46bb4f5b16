use contracts::shared::notification::{Notification, NotificationKind};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Сервис уведомлений (toast)
///
/// Уведомление скрывается само через `NotificationKind::display_millis`
/// или по клику.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Показать уведомление
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let notification = Notification {
            id,
            message: message.into(),
            kind,
        };
        match kind {
            NotificationKind::Error => log::error!("{}", notification.message),
            NotificationKind::Warning => log::warn!("{}", notification.message),
            _ => log::info!("{}", notification.message),
        }
        self.items.update(|items| items.push(notification));

        let this = *self;
        Timeout::new(kind.display_millis(), move || this.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }

    pub fn dismiss(&self, id: u64) {
        // сигнал может быть уже уничтожен вместе с приложением
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стек уведомлений в правом нижнем углу
#[component]
pub fn NotificationToasts() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toasts">
            {move || service.items.get().into_iter().map(|n| {
                let id = n.id;
                view! {
                    <div
                        class=format!("toast toast--{}", n.kind.as_str())
                        on:click=move |_| service.dismiss(id)
                    >
                        {n.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
