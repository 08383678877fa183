//! Клиентское представление реестра: состояние списка, вывод страницы
//! (фильтры → поиск → сортировка → пагинация) и раскладка пагинатора.

pub mod derive;
pub mod pagination;
pub mod state;

pub use derive::{derive_view, ViewResult};
pub use pagination::{paginate, PageToken, PageTokenKind, PaginationView};
pub use state::{FilterKey, SortColumn, SortColumnKind, SortDirection, ViewState, DEFAULT_PAGE_SIZE};

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Trait для строк, поддерживающих поиск по свободному тексту
pub trait Searchable {
    /// `term_lower` уже приведён к нижнему регистру
    fn matches_search(&self, term_lower: &str) -> bool;
}

/// Trait для строк, поддерживающих сортировку по колонке
pub trait Sortable {
    fn sort_key(&self, column: &SortColumn) -> SortKey;

    fn compare_by_column(&self, other: &Self, column: &SortColumn) -> Ordering {
        self.sort_key(column).cmp_key(&other.sort_key(column))
    }
}

/// Ключ сортировки с учётом типа колонки
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Строка в нижнем регистре
    Text(String),
    /// Сумма; отсутствующее значение приходит как 0
    Number(f64),
    /// Нераспознанная дата (`None`) больше любой корректной
    Date(Option<NaiveDate>),
}

impl SortKey {
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortKey::Date(a), SortKey::Date(b)) => match (a, b) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keys_compare_lexicographically() {
        let a = SortKey::Text("abc".into());
        let b = SortKey::Text("abd".into());
        assert_eq!(a.cmp_key(&b), Ordering::Less);
        assert_eq!(a.cmp_key(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_number_keys_compare_numerically() {
        assert_eq!(
            SortKey::Number(20.0).cmp_key(&SortKey::Number(100.0)),
            Ordering::Less
        );
        assert_eq!(
            SortKey::Number(0.0).cmp_key(&SortKey::Number(-0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_unparsed_dates_sort_after_valid_ones() {
        let valid = SortKey::Date(NaiveDate::from_ymd_opt(2030, 1, 1));
        let broken = SortKey::Date(None);
        assert_eq!(valid.cmp_key(&broken), Ordering::Less);
        assert_eq!(broken.cmp_key(&valid), Ordering::Greater);
        assert_eq!(broken.cmp_key(&SortKey::Date(None)), Ordering::Equal);
    }
}
