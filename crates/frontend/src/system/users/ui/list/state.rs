use contracts::system::users::User;
use std::cmp::Ordering;

/// Поле сортировки списка пользователей
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UserSortField {
    #[default]
    Username,
    FullName,
    CreatedAt,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsersListState {
    pub search_query: String,
    pub sort_field: UserSortField,
    pub sort_ascending: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: UserSortField::Username,
            sort_ascending: true,
        }
    }
}

impl UsersListState {
    /// Поиск по логину, имени и email без учёта регистра
    pub fn matches(&self, user: &User) -> bool {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        user.username.to_lowercase().contains(&query)
            || user
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
            || user
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
    }

    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = match self.sort_field {
            UserSortField::Username => a.username.to_lowercase().cmp(&b.username.to_lowercase()),
            UserSortField::FullName => a
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&b.full_name.as_deref().unwrap_or("").to_lowercase()),
            UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        if self.sort_ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }

    /// Повторный клик по тому же полю меняет направление
    pub fn toggle_sort(&mut self, field: UserSortField) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field;
            self.sort_ascending = true;
        }
    }

    pub fn sort_indicator(&self, field: UserSortField) -> &'static str {
        match (self.sort_field == field, self.sort_ascending) {
            (false, _) => "",
            (true, true) => " ▲",
            (true, false) => " ▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::system::users::UserId;

    fn user(id: i64, username: &str, full_name: Option<&str>) -> User {
        User {
            id: UserId(id),
            username: username.into(),
            email: Some(format!("{}@example.com", username)),
            full_name: full_name.map(String::from),
            role_id: None,
            is_active: true,
            created_at: Utc.timestamp_millis_opt(id).unwrap(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = UsersListState {
            search_query: "IVAN".into(),
            ..Default::default()
        };
        assert!(state.matches(&user(1, "ivanov", None)));
        assert!(state.matches(&user(2, "petrov", Some("Иван Петров Ivan"))));
        assert!(!state.matches(&user(3, "sidorov", None)));
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut state = UsersListState::default();
        let a = user(1, "anna", None);
        let b = user(2, "boris", None);
        assert_eq!(state.compare(&a, &b), Ordering::Less);

        state.toggle_sort(UserSortField::Username);
        assert!(!state.sort_ascending);
        assert_eq!(state.compare(&a, &b), Ordering::Greater);

        state.toggle_sort(UserSortField::CreatedAt);
        assert!(state.sort_ascending);
        assert_eq!(state.sort_indicator(UserSortField::CreatedAt), " ▲");
        assert_eq!(state.sort_indicator(UserSortField::Username), "");
    }
}
