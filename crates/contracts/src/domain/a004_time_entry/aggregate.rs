use crate::domain::a003_project::aggregate::{Project, ProjectId};
use crate::domain::common::{BaseAggregate, FormRecord};
use crate::shared::form_input::{format_date, parse_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Уникальный идентификатор записи времени
    TimeEntryId
);

const MAX_HOURS_PER_ENTRY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Учёт рабочего времени по проекту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(flatten)]
    pub base: BaseAggregate<TimeEntryId>,

    pub project_id: ProjectId,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub billable: bool,
}

/// Часы по проекту
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectHours {
    pub total: Decimal,
    pub billable: Decimal,
}

/// Сумма часов по проекту
pub fn project_hours<'a, I>(entries: I, project_id: ProjectId) -> ProjectHours
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries
        .into_iter()
        .filter(|e| e.project_id == project_id)
        .fold(ProjectHours::default(), |mut acc, e| {
            acc.total += e.hours;
            if e.billable {
                acc.billable += e.hours;
            }
            acc
        })
}

/// Стоимость оплачиваемых часов по ставке проекта
pub fn billable_amount<'a, I>(entries: I, project: &Project) -> Decimal
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    project_hours(entries, project.base.id).billable * project.hourly_rate
}

crate::impl_aggregate_root!(
    TimeEntry,
    TimeEntryId,
    "a004",
    "time_entry",
    "Запись времени",
    "Учёт времени"
);

impl FormRecord for TimeEntry {
    type Dto = TimeEntryDto;

    fn from_dto(id: TimeEntryId, dto: &TimeEntryDto) -> Result<Self, String> {
        let project_id = dto
            .project_id
            .ok_or_else(|| "Проект: поле обязательно для заполнения".to_string())?;
        let mut entry = Self {
            // код записи времени не вводится, берётся из ID
            base: BaseAggregate::new(id, format!("TE-{}", id.0), String::new()),
            project_id,
            date: parse_date("Дата", &dto.date)?,
            hours: dto.hours,
            billable: dto.billable,
        };
        entry.apply_dto(dto)?;
        Ok(entry)
    }

    fn apply_dto(&mut self, dto: &TimeEntryDto) -> Result<(), String> {
        self.project_id = dto
            .project_id
            .ok_or_else(|| "Проект: поле обязательно для заполнения".to_string())?;
        self.date = parse_date("Дата", &dto.date)?;
        let code = self.base.code.clone();
        self.base.apply(&code, &dto.description, &None);
        self.hours = dto.hours;
        self.billable = dto.billable;
        self.base.before_write();
        Ok(())
    }

    fn to_dto(&self) -> TimeEntryDto {
        TimeEntryDto {
            project_id: Some(self.project_id),
            date: format_date(self.date),
            hours: self.hours,
            description: self.base.description.clone(),
            billable: self.billable,
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate("Код", "Описание работ")?;
        if self.hours <= Decimal::ZERO || self.hours > MAX_HOURS_PER_ENTRY {
            return Err("Часы должны быть больше 0 и не больше 24".into());
        }
        Ok(())
    }
}

/// Форма записи времени
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryDto {
    pub project_id: Option<ProjectId>,
    pub date: String,
    pub hours: Decimal,
    pub description: String,
    pub billable: bool,
}

impl Default for TimeEntryDto {
    fn default() -> Self {
        Self {
            project_id: None,
            date: String::new(),
            hours: Decimal::ZERO,
            description: String::new(),
            billable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_project::aggregate::ProjectDto;
    use rust_decimal_macros::dec;

    fn entry(id: i64, project: i64, hours: Decimal, billable: bool) -> TimeEntry {
        let dto = TimeEntryDto {
            project_id: Some(ProjectId(project)),
            date: "2024-02-01".into(),
            hours,
            description: "Разработка".into(),
            billable,
        };
        TimeEntry::from_dto(TimeEntryId(id), &dto).unwrap()
    }

    #[test]
    fn test_code_from_id() {
        let e = entry(1700000000000, 1, dec!(2), true);
        assert_eq!(e.base.code, "TE-1700000000000");
        assert!(e.validate().is_ok());
    }

    #[test]
    fn test_hours_bounds() {
        assert!(entry(1, 1, dec!(0), true).validate().is_err());
        assert!(entry(1, 1, dec!(24.5), true).validate().is_err());
        assert!(entry(1, 1, dec!(24), true).validate().is_ok());
    }

    #[test]
    fn test_project_hours_and_amount() {
        let entries = vec![
            entry(1, 1, dec!(2.5), true),
            entry(2, 1, dec!(1), false),
            entry(3, 2, dec!(8), true),
        ];
        let hours = project_hours(&entries, ProjectId(1));
        assert_eq!(hours.total, dec!(3.5));
        assert_eq!(hours.billable, dec!(2.5));

        let project = Project::from_dto(
            ProjectId(1),
            &ProjectDto {
                code: "P".into(),
                description: "P".into(),
                start_date: "2024-01-01".into(),
                hourly_rate: dec!(80),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(billable_amount(&entries, &project), dec!(200));
    }

    #[test]
    fn test_requires_project() {
        let dto = TimeEntryDto {
            date: "2024-02-01".into(),
            hours: dec!(1),
            description: "x".into(),
            ..Default::default()
        };
        assert!(TimeEntry::from_dto(TimeEntryId(1), &dto).is_err());
    }
}
