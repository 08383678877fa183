use super::state::{FilterKey, SortColumn, SortDirection, ViewState};
use super::{Searchable, SortKey, Sortable};
use crate::domain::a001_application::{ApplicationRecord, RecordStore};

/// Видимая страница реестра
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<'a> {
    pub page_items: Vec<&'a ApplicationRecord>,
    /// Число записей после всех фильтров, до пагинации
    pub total_count: usize,
    pub page_count: usize,
}

/// Строит текущую страницу: закрытые → поиск → фильтры → сортировка → срез.
///
/// Каждая стадия применяется один раз. Страница за пределами диапазона
/// даёт пустой срез.
pub fn derive_view<'a>(store: &'a RecordStore, state: &ViewState) -> ViewResult<'a> {
    let rows: Vec<&ApplicationRecord> = store.records().iter().collect();
    let rows = retain_closed(rows, state.show_closed);
    let rows = retain_search(rows, &state.search_term);
    let mut rows = retain_filters(rows, state.active_filters());
    sort_rows(&mut rows, &state.sort_column, state.sort_direction);

    let total_count = rows.len();
    let page_size = state.effective_page_size();
    let page_count = total_count.div_ceil(page_size);
    let start = (state.page.max(1) - 1).saturating_mul(page_size);

    let page_items = rows.into_iter().skip(start).take(page_size).collect();

    ViewResult {
        page_items,
        total_count,
        page_count,
    }
}

/// «Показать закрытые» оставляет только принятые заявки с флагом `closed`
fn retain_closed(rows: Vec<&ApplicationRecord>, show_closed: bool) -> Vec<&ApplicationRecord> {
    if !show_closed {
        return rows;
    }
    rows.into_iter().filter(|r| r.is_closed_and_accepted()).collect()
}

/// Поиск включается непустым (после trim) запросом, а сравнение идёт
/// по запросу в нижнем регистре без обрезки пробелов
fn retain_search<'a, T: Searchable>(rows: Vec<&'a T>, search_term: &str) -> Vec<&'a T> {
    if search_term.trim().is_empty() {
        return rows;
    }
    let term = search_term.to_lowercase();
    rows.into_iter().filter(|r| r.matches_search(&term)).collect()
}

fn retain_filters<'a, 'f>(
    rows: Vec<&'a ApplicationRecord>,
    filters: impl Iterator<Item = (FilterKey, &'f str)>,
) -> Vec<&'a ApplicationRecord> {
    let filters: Vec<(FilterKey, &str)> = filters.collect();
    if filters.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|r| filters.iter().all(|(key, value)| r.filter_value(*key) == *value))
        .collect()
}

/// Устойчивая сортировка: равные ключи сохраняют исходный порядок,
/// направление применяется к результату сравнения
pub fn sort_rows<T: Sortable>(rows: &mut Vec<&T>, column: &SortColumn, direction: SortDirection) {
    let mut keyed: Vec<(SortKey, &T)> = rows.drain(..).map(|r| (r.sort_key(column), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = a.cmp_key(b);
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
    rows.extend(keyed.into_iter().map(|(_, r)| r));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(json: &str) -> RecordStore {
        RecordStore::from_json(json).unwrap()
    }

    fn numbers(view: &ViewResult<'_>) -> Vec<String> {
        view.page_items.iter().map(|r| r.number.clone()).collect()
    }

    fn numbered(count: usize) -> RecordStore {
        let records: Vec<String> = (1..=count)
            .map(|i| format!(r#"{{ "number": "{:03}", "status": "В работе" }}"#, i))
            .collect();
        store(&format!("[{}]", records.join(",")))
    }

    #[test]
    fn test_show_closed_keeps_only_accepted_and_closed() {
        let s = store(
            r#"[
                { "number": "1", "status": "Принято", "closed": true },
                { "number": "2", "status": "Принято", "closed": false },
                { "number": "3", "status": "В работе", "closed": true }
            ]"#,
        );
        let mut state = ViewState::default();
        assert_eq!(derive_view(&s, &state).total_count, 3);

        state.set_show_closed(true);
        let view = derive_view(&s, &state);
        assert_eq!(numbers(&view), vec!["1"]);
        assert_eq!(view.total_count, 1);
    }

    #[test]
    fn test_search_by_inn_is_case_sensitive_substring() {
        let s = store(
            r#"[
                { "number": "A-1", "name": "Школа", "inn": "7701000001" },
                { "number": "A-2", "name": "Сад", "inn": "7702999999" },
                { "number": "A-3", "name": "Парк", "inn": "5000000000" }
            ]"#,
        );
        let mut state = ViewState::default();
        state.set_search("02999");
        let view = derive_view(&s, &state);
        assert_eq!(numbers(&view), vec!["A-2"]);
    }

    #[test]
    fn test_search_number_and_name_case_insensitive() {
        let s = store(
            r#"[
                { "number": "ZV-100", "name": "Реконструкция Школы" },
                { "number": "zv-200", "name": "Детский сад" },
                { "number": "PR-300", "name": "Парк" }
            ]"#,
        );
        let mut state = ViewState::default();
        state.set_search("ZV");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["ZV-100", "zv-200"]);

        state.set_search("ШКОЛЫ");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["ZV-100"]);
    }

    #[test]
    fn test_search_with_surrounding_spaces_uses_raw_term() {
        let s = store(r#"[{ "number": "1", "name": "Школа" }]"#);
        let mut state = ViewState::default();
        state.set_search("   ");
        assert_eq!(derive_view(&s, &state).total_count, 1);

        state.set_search(" школа");
        assert_eq!(derive_view(&s, &state).total_count, 0);
    }

    #[test]
    fn test_column_filters_are_conjunctive_and_exact() {
        let s = store(
            r#"[
                { "number": "1", "direction": "Капремонт", "status": "Принято" },
                { "number": "2", "direction": "Капремонт", "status": "В работе" },
                { "number": "3", "direction": "Благоустройство", "status": "Принято" },
                { "number": "4", "direction": "Капремонт ", "status": "Принято" }
            ]"#,
        );
        let mut state = ViewState::default();
        state.set_filter("direction", "Капремонт");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["1", "2"]);

        state.set_filter("status", "Принято");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["1"]);

        state.set_filter("direction", "");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_numeric_sort_treats_missing_as_zero() {
        let s = store(
            r#"[
                { "number": "a", "fundVV": "" },
                { "number": "b", "fundVV": "100" },
                { "number": "c", "fundVV": "20" }
            ]"#,
        );
        let mut state = ViewState::default();
        state.set_sort("fundVV");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["a", "c", "b"]);

        state.set_sort("fundVV");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_date_sort_is_chronological() {
        let s = store(
            r#"[
                { "number": "1", "date": "05.01.2024" },
                { "number": "2", "date": "31.12.2023" },
                { "number": "3", "date": "не указана" },
                { "number": "4", "date": "01.02.2024" }
            ]"#,
        );
        let mut state = ViewState::default();
        state.set_sort("date");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["2", "1", "4", "3"]);

        state.set_sort("date");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["3", "4", "1", "2"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let s = store(
            r#"[
                { "number": "b-2" },
                { "number": "A-1" },
                { "number": "a-0" }
            ]"#,
        );
        let state = ViewState::default();
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["a-0", "A-1", "b-2"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let s = store(
            r#"[
                { "number": "3", "status": "В работе" },
                { "number": "1", "status": "В работе" },
                { "number": "2", "status": "В работе" }
            ]"#,
        );
        let mut state = ViewState::default();
        state.set_sort("status");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["3", "1", "2"]);

        state.set_sort("status");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_unknown_sort_column_keeps_store_order() {
        let s = store(r#"[{ "number": "2" }, { "number": "1" }]"#);
        let mut state = ViewState::default();
        state.set_sort("region");
        assert_eq!(numbers(&derive_view(&s, &state)), vec!["2", "1"]);
    }

    #[test]
    fn test_pagination_slices_and_counts() {
        let s = numbered(45);
        let mut state = ViewState::default();

        let view = derive_view(&s, &state);
        assert_eq!(view.total_count, 45);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.page_items.len(), 20);
        assert_eq!(view.page_items[0].number, "001");

        state.set_page(3);
        let view = derive_view(&s, &state);
        assert_eq!(view.page_items.len(), 5);
        assert_eq!(view.page_items[0].number, "041");

        state.set_page_size(50);
        let view = derive_view(&s, &state);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.page_items.len(), 45);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let s = numbered(5);
        let mut state = ViewState::default();
        state.set_page(7);
        let view = derive_view(&s, &state);
        assert!(view.page_items.is_empty());
        assert_eq!(view.total_count, 5);
        assert_eq!(view.page_count, 1);

        state.set_page(usize::MAX);
        assert!(derive_view(&s, &state).page_items.is_empty());
    }

    #[test]
    fn test_page_never_exceeds_page_size_or_total() {
        let s = numbered(23);
        for page_size in [1, 3, 7, 20, 50] {
            for page in 1..=30 {
                let mut state = ViewState::with_page_size(page_size);
                state.set_page(page);
                let view = derive_view(&s, &state);
                assert!(view.page_items.len() <= page_size);
                assert!(view.page_items.len() <= view.total_count);
            }
        }
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let s = numbered(5);
        let mut state = ViewState::default();
        state.set_search("нет такой");
        let view = derive_view(&s, &state);
        assert_eq!(view.total_count, 0);
        assert_eq!(view.page_count, 0);
        assert!(view.page_items.is_empty());
    }

    #[test]
    fn test_reset_filters_restores_initial_total() {
        let s = store(
            r#"[
                { "number": "1", "direction": "Капремонт", "name": "Школа" },
                { "number": "2", "direction": "Благоустройство", "name": "Парк" },
                { "number": "3", "direction": "Капремонт", "name": "Сад" }
            ]"#,
        );
        let mut state = ViewState::default();
        let initial = derive_view(&s, &state).total_count;

        state.set_search("школа");
        state.set_filter("direction", "Капремонт");
        assert_eq!(derive_view(&s, &state).total_count, 1);

        state.reset_filters();
        assert_eq!(derive_view(&s, &state).total_count, initial);
    }

    #[test]
    fn test_store_is_not_mutated() {
        let s = numbered(10);
        let before = s.records().to_vec();
        let mut state = ViewState::default();
        state.set_sort("number");
        let _ = derive_view(&s, &state);
        assert_eq!(s.records(), before.as_slice());
    }
}
