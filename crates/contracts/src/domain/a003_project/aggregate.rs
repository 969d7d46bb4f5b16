use crate::domain::a001_account::aggregate::AccountId;
use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::{format_date, parse_date, parse_optional_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор проекта
    ProjectId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Планирование",
            ProjectStatus::Active => "В работе",
            ProjectStatus::OnHold => "Приостановлен",
            ProjectStatus::Completed => "Завершён",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

/// Проект
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectId>,

    /// Заказчик (необязательно)
    pub account_id: Option<AccountId>,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub budget: Decimal,
    /// Ставка за час для оплачиваемых часов
    pub hourly_rate: Decimal,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

crate::impl_aggregate_root!(Project, ProjectId, "a003", "project", "Проект", "Проекты");

impl FormRecord for Project {
    type Dto = ProjectDto;

    fn from_dto(id: ProjectId, dto: &ProjectDto) -> Result<Self, String> {
        let mut project = Self {
            base: BaseAggregate::new(id, String::new(), String::new()),
            account_id: None,
            status: dto.status,
            start_date: parse_date("Дата начала", &dto.start_date)?,
            end_date: None,
            budget: Decimal::ZERO,
            hourly_rate: Decimal::ZERO,
        };
        project.apply_dto(dto)?;
        Ok(project)
    }

    fn apply_dto(&mut self, dto: &ProjectDto) -> Result<(), String> {
        self.start_date = parse_date("Дата начала", &dto.start_date)?;
        self.end_date = parse_optional_date("Дата окончания", &dto.end_date)?;
        self.base.apply(&dto.code, &dto.description, &dto.comment);
        self.account_id = dto.account_id;
        self.status = dto.status;
        self.budget = dto.budget;
        self.hourly_rate = dto.hourly_rate;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> ProjectDto {
        ProjectDto {
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            account_id: self.account_id,
            status: self.status,
            start_date: format_date(self.start_date),
            end_date: self.end_date.map(format_date).unwrap_or_default(),
            budget: self.budget,
            hourly_rate: self.hourly_rate,
            comment: self.base.comment.clone(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Код", "Название")?;
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err("Дата окончания не может быть раньше даты начала".into());
            }
        }
        if self.budget < Decimal::ZERO {
            return Err("Бюджет не может быть отрицательным".into());
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err("Ставка не может быть отрицательной".into());
        }
        Ok(())
    }
}

/// Форма проекта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub code: String,
    pub description: String,
    pub account_id: Option<AccountId>,
    pub status: ProjectStatus,
    pub start_date: String,
    pub end_date: String,
    pub budget: Decimal,
    pub hourly_rate: Decimal,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dto() -> ProjectDto {
        ProjectDto {
            code: "PRJ-01".into(),
            description: "Внедрение учёта".into(),
            account_id: Some(AccountId(1)),
            status: ProjectStatus::Active,
            start_date: "2024-01-10".into(),
            end_date: "".into(),
            budget: dec!(50000),
            hourly_rate: dec!(85),
            comment: None,
        }
    }

    #[test]
    fn test_open_ended_project() {
        let project = Project::from_dto(ProjectId(1), &dto()).unwrap();
        assert_eq!(project.end_date, None);
        assert!(project.validate().is_ok());
        assert!(project.is_active());
        assert_eq!(project.to_dto(), dto());
    }

    #[test]
    fn test_end_before_start() {
        let mut form = dto();
        form.end_date = "2023-12-31".into();
        let project = Project::from_dto(ProjectId(1), &form).unwrap();
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_bad_start_date() {
        let mut form = dto();
        form.start_date = "".into();
        assert!(Project::from_dto(ProjectId(1), &form).is_err());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProjectStatus::parse("on_hold"), Some(ProjectStatus::OnHold));
        for s in ProjectStatus::all() {
            assert_eq!(ProjectStatus::parse(s.as_str()), Some(*s));
        }
    }
}
