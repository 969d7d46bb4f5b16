use crate::domain::common::{FormRecord, Record};
use crate::shared::form_input::{non_empty, require};
use crate::shared::record_list::RecordList;
use crate::system::roles::RoleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор пользователя
    UserId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    /// Роль (ссылка без контроля целостности)
    pub role_id: Option<RoleId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    type Id = UserId;

    fn record_id(&self) -> UserId {
        self.id
    }
}

impl FormRecord for User {
    type Dto = UserDto;

    fn from_dto(id: UserId, dto: &UserDto) -> Result<Self, String> {
        let mut user = Self {
            id,
            username: String::new(),
            email: None,
            full_name: None,
            role_id: None,
            is_active: dto.is_active,
            created_at: Utc::now(),
        };
        user.apply_dto(dto)?;
        Ok(user)
    }

    fn apply_dto(&mut self, dto: &UserDto) -> Result<(), String> {
        self.username = dto.username.trim().to_string();
        self.email = non_empty(&dto.email);
        self.full_name = non_empty(&dto.full_name);
        self.role_id = dto.role_id;
        self.is_active = dto.is_active;
        Ok(())
    }

    fn to_dto(&self) -> UserDto {
        UserDto {
            username: self.username.clone(),
            email: self.email.clone().unwrap_or_default(),
            full_name: self.full_name.clone().unwrap_or_default(),
            role_id: self.role_id,
            is_active: self.is_active,
        }
    }

    fn validate(&self) -> Result<(), String> {
        require("Логин", &self.username)?;
        if self.username.chars().any(char::is_whitespace) {
            return Err("Логин не может содержать пробелы".into());
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(format!("Email: неверный адрес '{}'", email));
            }
        }
        Ok(())
    }
}

/// Форма пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role_id: Option<RoleId>,
    pub is_active: bool,
}

impl Default for UserDto {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            full_name: String::new(),
            role_id: None,
            is_active: true,
        }
    }
}

/// Логин не должен повторяться (без учёта регистра); `editing` — редактируемый пользователь
pub fn ensure_unique_username(
    users: &RecordList<User>,
    editing: Option<UserId>,
    username: &str,
) -> Result<(), String> {
    let wanted = username.trim();
    let taken = users
        .iter()
        .any(|u| Some(u.id) != editing && u.username.eq_ignore_ascii_case(wanted));
    if taken {
        Err(format!("Логин '{}' уже занят", wanted))
    } else {
        Ok(())
    }
}

/// Количество пользователей с ролью
pub fn users_with_role<'a, I>(users: I, role_id: RoleId) -> usize
where
    I: IntoIterator<Item = &'a User>,
{
    users
        .into_iter()
        .filter(|u| u.role_id == Some(role_id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(username: &str, role: Option<i64>) -> UserDto {
        UserDto {
            username: username.into(),
            email: format!("{}@example.test", username.trim()),
            role_id: role.map(RoleId),
            ..Default::default()
        }
    }

    #[test]
    fn test_username_rules() {
        let user = User::from_dto(UserId(1), &dto(" admin ", None)).unwrap();
        assert_eq!(user.username, "admin");
        assert!(user.validate().is_ok());

        let user = User::from_dto(UserId(1), &dto("john doe", None)).unwrap();
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_unique_username() {
        let mut users: RecordList<User> = RecordList::default();
        let admin = users.save(None, &dto("admin", Some(1)), 1).unwrap();
        users.save(None, &dto("maria", Some(2)), 2).unwrap();

        assert!(ensure_unique_username(&users, None, "ADMIN").is_err());
        assert!(ensure_unique_username(&users, Some(admin), "admin").is_ok());
        assert!(ensure_unique_username(&users, None, "pavel").is_ok());
    }

    #[test]
    fn test_users_with_role() {
        let mut users: RecordList<User> = RecordList::default();
        users.save(None, &dto("a", Some(1)), 1).unwrap();
        users.save(None, &dto("b", Some(1)), 2).unwrap();
        users.save(None, &dto("c", None), 3).unwrap();
        assert_eq!(users_with_role(&users, RoleId(1)), 2);
        assert_eq!(users_with_role(&users, RoleId(2)), 0);
    }
}
