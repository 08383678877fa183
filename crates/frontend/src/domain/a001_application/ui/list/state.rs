use crate::shared::config::grid_config;
use contracts::domain::a001_application::{ApplicationRecord, RecordStore};
use contracts::shared::list_view::{derive_view, paginate, PaginationView, ViewState};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ApplicationListState {
    // фильтры, сортировка, страница
    pub view: ViewState,

    // текущая страница после вывода
    pub items: Vec<ApplicationRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub pagination: PaginationView,
}

impl Default for ApplicationListState {
    fn default() -> Self {
        Self {
            view: ViewState::with_page_size(grid_config().page_size),
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
            pagination: PaginationView::default(),
        }
    }
}

impl ApplicationListState {
    /// Пересчитывает видимую страницу и пагинатор по текущему `view`
    pub fn refresh(&mut self, store: &RecordStore) {
        let result = derive_view(store, &self.view);
        self.items = result.page_items.into_iter().cloned().collect();
        self.total_count = result.total_count;
        self.total_pages = result.page_count;
        self.pagination = paginate(self.view.page, result.page_count);
    }

    /// Изменяет состояние списка и сразу пересчитывает страницу
    pub fn apply(&mut self, store: &RecordStore, mutate: impl FnOnce(&mut ViewState)) {
        mutate(&mut self.view);
        self.refresh(store);
    }

    /// Фильтр по ключу колонки; неизвестный ключ пропускается с предупреждением
    pub fn apply_filter(&mut self, store: &RecordStore, key: &str, value: &str) -> bool {
        if !self.view.set_filter(key, value) {
            log::warn!("Unknown filter key {:?}, ignored", key);
            return false;
        }
        self.refresh(store);
        true
    }
}

pub fn create_state() -> RwSignal<ApplicationListState> {
    RwSignal::new(ApplicationListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(count: usize) -> RecordStore {
        let records = (1..=count)
            .map(|i| ApplicationRecord {
                number: format!("{:03}", i),
                direction: String::new(),
                name: format!("Объект {}", i),
                inn: String::new(),
                object_type: String::new(),
                status: "В работе".to_string(),
                fund_vv: None,
                fund_odo: None,
                chv: None,
                vst: None,
                date: String::new(),
                closed: false,
            })
            .collect();
        RecordStore::new(records).unwrap()
    }

    #[test]
    fn test_refresh_fills_page_and_pagination() {
        let store = store(45);
        let mut state = ApplicationListState::default();
        state.refresh(&store);
        assert_eq!(state.items.len(), 20);
        assert_eq!(state.total_count, 45);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.pagination.page_info(), "1 из 3");
    }

    #[test]
    fn test_apply_mutates_then_refreshes() {
        let store = store(45);
        let mut state = ApplicationListState::default();
        state.refresh(&store);

        state.apply(&store, |v| v.set_page(3));
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.pagination.current, 3);

        state.apply(&store, |v| v.set_search("Объект 4"));
        assert_eq!(state.view.page, 1);
        assert_eq!(state.total_count, 7);
        assert!(state.pagination.is_empty());
    }

    #[test]
    fn test_apply_filter_ignores_unknown_key() {
        let store = store(45);
        let mut state = ApplicationListState::default();
        state.apply(&store, |v| v.set_page(2));

        assert!(!state.apply_filter(&store, "region", "Москва"));
        assert_eq!(state.view.page, 2);
        assert_eq!(state.total_count, 45);
        assert_eq!(state.view.active_filters_count(), 0);

        assert!(state.apply_filter(&store, "status", "Принято"));
        assert_eq!(state.view.page, 1);
        assert_eq!(state.total_count, 0);
    }

    #[test]
    fn test_huge_page_gives_empty_page_not_panic() {
        let store = store(45);
        let mut state = ApplicationListState::default();
        state.apply(&store, |v| v.set_page(usize::MAX));
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 3);
        assert!(state.pagination.tokens.iter().all(|t| !t.active));
        assert!(state.pagination.tokens.last().unwrap().disabled);
    }
}
