use contracts::shared::i18n::t;
use leptos::prelude::*;

/// Разделы приложения; ключ раздела — ключ вкладки
pub const MODULE_KEYS: &[&str] = &[
    "accounting",
    "projects",
    "banking",
    "purchasing",
    "sales",
    "administration",
];

/// Заголовок вкладки раздела
pub fn module_title(key: &str) -> String {
    t(&format!("nav.{}", key)).to_string()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Открыть вкладку (или активировать уже открытую)
    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Закрыть вкладку; списки страницы уничтожаются вместе с ней
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ctx: &AppGlobalContext) -> Vec<String> {
        ctx.opened
            .get_untracked()
            .into_iter()
            .map(|t| t.key)
            .collect()
    }

    #[test]
    fn test_open_tab_once_and_activate() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();

        ctx.open_tab("banking", "Банк");
        ctx.open_tab("sales", "Заказы");
        ctx.open_tab("banking", "Банк");

        assert_eq!(keys(&ctx), vec!["banking", "sales"]);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("banking"));
    }

    #[test]
    fn test_close_active_tab_activates_last() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();

        ctx.open_tab("accounting", "A");
        ctx.open_tab("projects", "P");
        ctx.open_tab("banking", "B");
        ctx.activate_tab("projects");

        ctx.close_tab("projects");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("banking"));

        ctx.close_tab("accounting");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("banking"));

        ctx.close_tab("banking");
        assert_eq!(ctx.active.get_untracked(), None);
    }

    #[test]
    fn test_module_titles_are_translated() {
        for key in MODULE_KEYS {
            assert_ne!(module_title(key), format!("nav.{}", key));
        }
    }
}
