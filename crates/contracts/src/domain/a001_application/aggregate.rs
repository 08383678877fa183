use super::status::ApplicationStatus;
use crate::shared::list_view::{FilterKey, Searchable, SortColumn, SortKey, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Наименование длиннее этого порога обрезается при отображении
pub const NAME_DISPLAY_LIMIT: usize = 35;

/// Сколько символов наименования остаётся перед многоточием
pub const NAME_CUT_AT: usize = 32;

/// Формат даты заявки в исходных данных
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// ============================================================================
// Record
// ============================================================================

/// Заявка (одна строка реестра)
///
/// Ключи JSON совпадают с исходным файлом данных (`objectType`, `fundVV`, ...).
/// Денежные поля допускают число, числовую строку, пустую строку, `null`
/// или отсутствие ключа; всё, что не является числом, хранится как `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationRecord {
    pub number: String,

    #[serde(default)]
    pub direction: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub inn: String,

    #[serde(rename = "objectType", default)]
    pub object_type: String,

    #[serde(default)]
    pub status: String,

    #[serde(rename = "fundVV", default, deserialize_with = "deserialize_amount")]
    pub fund_vv: Option<f64>,

    #[serde(rename = "fundODO", default, deserialize_with = "deserialize_amount")]
    pub fund_odo: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    pub chv: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_amount")]
    pub vst: Option<f64>,

    /// Дата подачи в формате `DD.MM.YYYY`
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub closed: bool,
}

impl ApplicationRecord {
    pub fn status_kind(&self) -> ApplicationStatus {
        ApplicationStatus::from_label(&self.status)
    }

    /// Наименование для ячейки таблицы; полное значение уходит в подсказку
    pub fn short_name(&self) -> String {
        if self.name.chars().count() > NAME_DISPLAY_LIMIT {
            let head: String = self.name.chars().take(NAME_CUT_AT).collect();
            format!("{}...", head)
        } else {
            self.name.clone()
        }
    }

    /// Кнопка «Запросить» доступна для всех непринятых заявок
    pub fn can_request_documents(&self) -> bool {
        self.status_kind() != ApplicationStatus::Accepted
    }

    /// Кнопка «Скачать» доступна для заявок на доработке или с замечаниями
    pub fn can_download_remarks(&self) -> bool {
        self.status.contains("доработ") || self.status_kind() == ApplicationStatus::WithRemarks
    }

    /// «Закрытая» заявка — это принятая заявка с флагом `closed`
    pub fn is_closed_and_accepted(&self) -> bool {
        self.closed && self.status_kind() == ApplicationStatus::Accepted
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Значение измерения, по которому работают выпадающие фильтры
    pub fn filter_value(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Direction => &self.direction,
            FilterKey::ObjectType => &self.object_type,
            FilterKey::Status => &self.status,
        }
    }

    fn amount(&self, column: &SortColumn) -> Option<f64> {
        match column {
            SortColumn::FundVv => self.fund_vv,
            SortColumn::FundOdo => self.fund_odo,
            SortColumn::Chv => self.chv,
            SortColumn::Vst => self.vst,
            _ => None,
        }
    }

    fn text(&self, column: &SortColumn) -> &str {
        match column {
            SortColumn::Number => &self.number,
            SortColumn::Direction => &self.direction,
            SortColumn::Name => &self.name,
            SortColumn::Inn => &self.inn,
            SortColumn::ObjectType => &self.object_type,
            SortColumn::Status => &self.status,
            SortColumn::Date => &self.date,
            _ => "",
        }
    }
}

impl Sortable for ApplicationRecord {
    fn sort_key(&self, column: &SortColumn) -> SortKey {
        match column {
            SortColumn::Date => SortKey::Date(self.parsed_date()),
            SortColumn::FundVv | SortColumn::FundOdo | SortColumn::Chv | SortColumn::Vst => {
                SortKey::Number(self.amount(column).unwrap_or(0.0))
            }
            _ => SortKey::Text(self.text(column).to_lowercase()),
        }
    }
}

impl Searchable for ApplicationRecord {
    fn matches_search(&self, term_lower: &str) -> bool {
        self.number.to_lowercase().contains(term_lower)
            || self.name.to_lowercase().contains(term_lower)
            || self.inn.contains(term_lower)
    }
}

// ============================================================================
// Money fields
// ============================================================================

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(amount_from_json))
}

/// Приведение сырого JSON-значения к сумме
pub fn amount_from_json(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}
