use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Размер страницы, если снаружи пришло 0 или ничего
pub const DEFAULT_PAGE_SIZE: usize = 20;

// ============================================================================
// Sort
// ============================================================================

/// Колонка сортировки. Ключи совпадают с именами полей заявки в JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Number,
    Direction,
    Name,
    Inn,
    ObjectType,
    Status,
    FundVv,
    FundOdo,
    Chv,
    Vst,
    Date,
    /// Неизвестная колонка: сравнивается как пустая строка, порядок не меняется
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumnKind {
    Text,
    Numeric,
    Date,
}

impl SortColumn {
    pub fn from_key(key: &str) -> Self {
        match key {
            "number" => SortColumn::Number,
            "direction" => SortColumn::Direction,
            "name" => SortColumn::Name,
            "inn" => SortColumn::Inn,
            "objectType" => SortColumn::ObjectType,
            "status" => SortColumn::Status,
            "fundVV" => SortColumn::FundVv,
            "fundODO" => SortColumn::FundOdo,
            "chv" => SortColumn::Chv,
            "vst" => SortColumn::Vst,
            "date" => SortColumn::Date,
            other => SortColumn::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            SortColumn::Number => "number",
            SortColumn::Direction => "direction",
            SortColumn::Name => "name",
            SortColumn::Inn => "inn",
            SortColumn::ObjectType => "objectType",
            SortColumn::Status => "status",
            SortColumn::FundVv => "fundVV",
            SortColumn::FundOdo => "fundODO",
            SortColumn::Chv => "chv",
            SortColumn::Vst => "vst",
            SortColumn::Date => "date",
            SortColumn::Other(key) => key,
        }
    }

    pub fn kind(&self) -> SortColumnKind {
        match self {
            SortColumn::Date => SortColumnKind::Date,
            SortColumn::FundVv | SortColumn::FundOdo | SortColumn::Chv | SortColumn::Vst => {
                SortColumnKind::Numeric
            }
            _ => SortColumnKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Измерения выпадающих фильтров. Набор фиксирован.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    Direction,
    ObjectType,
    Status,
}

impl FilterKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "direction" => Some(FilterKey::Direction),
            "objectType" => Some(FilterKey::ObjectType),
            "status" => Some(FilterKey::Status),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FilterKey::Direction => "direction",
            FilterKey::ObjectType => "objectType",
            FilterKey::Status => "status",
        }
    }

    /// Подпись на кнопке фильтра
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterKey::Direction => "Направление",
            FilterKey::ObjectType => "Тип объекта",
            FilterKey::Status => "Статус",
        }
    }

    pub fn all() -> Vec<FilterKey> {
        vec![FilterKey::Direction, FilterKey::ObjectType, FilterKey::Status]
    }
}

// ============================================================================
// View state
// ============================================================================

/// Состояние списка заявок на время сессии страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Текущая страница, с 1
    pub page: usize,
    pub page_size: usize,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub search_term: String,
    /// Пустая строка — измерение не ограничено
    pub filters: BTreeMap<FilterKey, String>,
    pub show_closed: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_column: SortColumn::Number,
            sort_direction: SortDirection::Asc,
            search_term: String::new(),
            filters: FilterKey::all()
                .into_iter()
                .map(|key| (key, String::new()))
                .collect(),
            show_closed: false,
        }
    }
}

impl ViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        let mut state = Self::default();
        state.page_size = normalize_page_size(page_size);
        state
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Повторный выбор той же колонки меняет направление,
    /// новая колонка всегда начинается с возрастания. Страница сохраняется.
    pub fn set_sort(&mut self, key: &str) {
        let column = SortColumn::from_key(key);
        if column == self.sort_column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.page = 1;
    }

    /// Возвращает `false`, если ключ не входит в набор фильтров
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        match FilterKey::from_key(key) {
            Some(filter_key) => {
                self.set_filter_value(filter_key, value);
                true
            }
            None => false,
        }
    }

    pub fn set_filter_value(&mut self, key: FilterKey, value: &str) {
        self.filters.insert(key, value.to_string());
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = normalize_page_size(page_size);
        self.page = 1;
    }

    pub fn set_show_closed(&mut self, show_closed: bool) {
        self.show_closed = show_closed;
        self.page = 1;
    }

    /// Сбрасывает поиск и выпадающие фильтры. Сортировка, размер страницы
    /// и флаг закрытых заявок не трогаются.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        for value in self.filters.values_mut() {
            value.clear();
        }
        self.page = 1;
    }

    pub fn filter_value(&self, key: FilterKey) -> &str {
        self.filters.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Фильтры с выбранным значением
    pub fn active_filters(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        self.filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (*key, value.as_str()))
    }

    pub fn is_search_active(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn active_filters_count(&self) -> usize {
        let mut count = self.active_filters().count();
        if self.is_search_active() {
            count += 1;
        }
        if self.show_closed {
            count += 1;
        }
        count
    }

    pub fn effective_page_size(&self) -> usize {
        normalize_page_size(self.page_size)
    }
}

fn normalize_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}
