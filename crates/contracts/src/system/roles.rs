use crate::domain::common::{FormRecord, Record};
use crate::shared::form_input::require;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор роли
    RoleId
);

/// Право доступа к разделу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewAccounting,
    ManageAccounting,
    ViewProjects,
    ManageProjects,
    ViewBanking,
    ManageBanking,
    ManageOrders,
    ManageUsers,
}

impl Permission {
    pub fn all() -> &'static [Permission] {
        &[
            Permission::ViewAccounting,
            Permission::ManageAccounting,
            Permission::ViewProjects,
            Permission::ManageProjects,
            Permission::ViewBanking,
            Permission::ManageBanking,
            Permission::ManageOrders,
            Permission::ManageUsers,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewAccounting => "view_accounting",
            Permission::ManageAccounting => "manage_accounting",
            Permission::ViewProjects => "view_projects",
            Permission::ManageProjects => "manage_projects",
            Permission::ViewBanking => "view_banking",
            Permission::ManageBanking => "manage_banking",
            Permission::ManageOrders => "manage_orders",
            Permission::ManageUsers => "manage_users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Permission::ViewAccounting => "Просмотр контрагентов и счетов",
            Permission::ManageAccounting => "Изменение контрагентов и счетов",
            Permission::ViewProjects => "Просмотр проектов",
            Permission::ManageProjects => "Изменение проектов",
            Permission::ViewBanking => "Просмотр банка",
            Permission::ManageBanking => "Банковские операции",
            Permission::ManageOrders => "Заказы",
            Permission::ManageUsers => "Пользователи и роли",
        }
    }
}

/// Роль пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl Record for Role {
    type Id = RoleId;

    fn record_id(&self) -> RoleId {
        self.id
    }
}

impl FormRecord for Role {
    type Dto = RoleDto;

    fn from_dto(id: RoleId, dto: &RoleDto) -> Result<Self, String> {
        let mut role = Self {
            id,
            name: String::new(),
            description: None,
            permissions: Vec::new(),
        };
        role.apply_dto(dto)?;
        Ok(role)
    }

    fn apply_dto(&mut self, dto: &RoleDto) -> Result<(), String> {
        self.name = dto.name.trim().to_string();
        self.description = crate::shared::form_input::non_empty(&dto.description);
        let mut permissions = dto.permissions.clone();
        permissions.sort();
        permissions.dedup();
        self.permissions = permissions;
        Ok(())
    }

    fn to_dto(&self) -> RoleDto {
        RoleDto {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            permissions: self.permissions.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        require("Название роли", &self.name)
    }
}

/// Форма роли
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    pub name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
}

impl RoleDto {
    /// Включить или выключить право (чекбокс формы)
    pub fn toggle(&mut self, permission: Permission, enabled: bool) {
        self.permissions.retain(|p| *p != permission);
        if enabled {
            self.permissions.push(permission);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_deduplicated_and_sorted() {
        let dto = RoleDto {
            name: " Бухгалтер ".into(),
            description: "".into(),
            permissions: vec![
                Permission::ManageBanking,
                Permission::ViewAccounting,
                Permission::ManageBanking,
            ],
        };
        let role = Role::from_dto(RoleId(1), &dto).unwrap();
        assert_eq!(role.name, "Бухгалтер");
        assert_eq!(role.description, None);
        assert_eq!(
            role.permissions,
            vec![Permission::ViewAccounting, Permission::ManageBanking]
        );
        assert!(role.has(Permission::ManageBanking));
        assert!(!role.has(Permission::ManageUsers));
    }

    #[test]
    fn test_toggle() {
        let mut dto = RoleDto::default();
        dto.toggle(Permission::ManageOrders, true);
        dto.toggle(Permission::ManageOrders, true);
        assert_eq!(dto.permissions, vec![Permission::ManageOrders]);
        dto.toggle(Permission::ManageOrders, false);
        assert!(dto.permissions.is_empty());
    }

    #[test]
    fn test_name_required() {
        let role = Role::from_dto(RoleId(1), &RoleDto::default()).unwrap();
        assert!(role.validate().is_err());
    }
}
