use super::AggregateId;

/// Запись, которую можно хранить в списке страницы
pub trait Record: Clone {
    /// Тип идентификатора записи
    type Id: AggregateId;

    fn record_id(&self) -> Self::Id;
}

/// Запись, которая создаётся и редактируется через форму (DTO)
pub trait FormRecord: Record {
    /// Состояние формы
    type Dto: Clone + Default;

    /// Создать запись из формы с заранее выданным ID
    fn from_dto(id: Self::Id, dto: &Self::Dto) -> Result<Self, String>;

    /// Применить изменения из формы
    fn apply_dto(&mut self, dto: &Self::Dto) -> Result<(), String>;

    /// Заполнить форму из записи
    fn to_dto(&self) -> Self::Dto;

    /// Валидация данных
    fn validate(&self) -> Result<(), String>;
}
