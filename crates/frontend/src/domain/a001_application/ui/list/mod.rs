pub mod state;

use self::state::create_state;
use crate::domain::a001_application::data::load_record_store;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::config::grid_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_application::{ApplicationStatus, RecordStore};
use contracts::shared::list_view::FilterKey;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a001-applications-table";

/// Варианты выпадающего фильтра: первым идёт «Все» (пустое значение)
fn filter_options(store: &RecordStore, key: FilterKey) -> Vec<(String, String)> {
    let values = match key {
        FilterKey::Status => ApplicationStatus::all()
            .iter()
            .map(|s| s.label().to_string())
            .collect(),
        _ => store.distinct_values(key),
    };
    std::iter::once((String::new(), "Все".to_string()))
        .chain(values.into_iter().map(|v| (v.clone(), v)))
        .collect()
}

#[component]
pub fn ApplicationList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(true);

    let store = match load_record_store() {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load applications: {:#}", e);
            set_error.set(Some(format!("Ошибка загрузки данных: {:#}", e)));
            RecordStore::default()
        }
    };
    let store = StoredValue::new(store);
    store.with_value(|records| state.update(|s| s.refresh(records)));

    let toggle_sort = move |key: String| {
        store.with_value(|records| {
            state.update(|s| s.apply(records, |v| v.set_sort(&key)));
        });
        state.with_untracked(|s| {
            log::debug!("sort: {} {:?}", s.view.sort_column.key(), s.view.sort_direction)
        });
    };

    let go_to_page = move |page: usize| {
        log::debug!("page: {}", page);
        store.with_value(|records| state.update(|s| s.apply(records, |v| v.set_page(page))));
    };

    let change_page_size = move |size: usize| {
        log::debug!("page size: {}", size);
        store.with_value(|records| {
            state.update(|s| s.apply(records, |v| v.set_page_size(size)))
        });
    };

    let apply_search = move |term: String| {
        store.with_value(|records| {
            state.update(|s| s.apply(records, |v| v.set_search(&term)))
        });
    };

    let apply_filter = move |key: &'static str, value: String| {
        log::debug!("filter: {} = {:?}", key, value);
        store.with_value(|records| {
            state.update(|s| {
                s.apply_filter(records, key, &value);
            })
        });
    };

    let set_show_closed = move |show: bool| {
        log::debug!("show closed: {}", show);
        store.with_value(|records| {
            state.update(|s| s.apply(records, |v| v.set_show_closed(show)))
        });
    };

    let reset_filters = move |_: leptos::ev::MouseEvent| {
        log::debug!("reset filters");
        store.with_value(|records| state.update(|s| s.apply(records, |v| v.reset_filters())));
    };

    let active_filters_count =
        Signal::derive(move || state.with(|s| s.view.active_filters_count()));
    let search_term = Memo::new(move |_| state.with(|s| s.view.search_term.clone()));
    let sort_key = Signal::derive(move || state.with(|s| s.view.sort_column.key().to_string()));
    let sort_ascending =
        Signal::derive(move || state.with(|s| s.view.sort_direction.is_ascending()));
    let on_sort = Callback::new(toggle_sort);

    let filter_dropdown = move |key: FilterKey| {
        let options = store.with_value(|records| filter_options(records, key));
        let selected = Memo::new(move |_| state.with(|s| s.view.filter_value(key).to_string()));
        view! {
            <div class="form__group dropdown">
                <label class="form__label">
                    {move || {
                        let value = selected.get();
                        let shown = if value.is_empty() { "Все".to_string() } else { value };
                        format!("{}: {}", key.display_name(), shown)
                    }}
                </label>
                <select
                    class="form__select"
                    data-filter=key.key()
                    on:change=move |ev| apply_filter(key.key(), event_target_value(&ev))
                    prop:value=move || selected.get()
                >
                    {options.into_iter().map(|(value, label)| {
                        let value_for_check = value.clone();
                        view! {
                            <option value=value selected=move || selected.get() == value_for_check>
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div id="a001_application--list" class="page" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Реестр заявок"</h1>
                    <Badge variant="primary">
                        <span id="totalCount">{move || state.with(|s| s.total_count)}</span>
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    pagination_controls=move || view! {
                        <PaginationControls
                            pagination=Signal::derive(move || state.with(|s| s.pagination.clone()))
                            page_size=Signal::derive(move || state.with(|s| s.view.page_size))
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                            page_size_options=grid_config().page_size_options.clone()
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <SearchInput
                                    value=search_term
                                    on_change=Callback::new(apply_search)
                                    placeholder="Номер, наименование, ИНН..."
                                />
                            </div>
                            {FilterKey::all().into_iter().map(filter_dropdown).collect_view()}
                            <div class="form__checkbox-wrapper">
                                <input
                                    id="showClosed"
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=move || state.with(|s| s.view.show_closed)
                                    on:change=move |ev| set_show_closed(event_target_checked(&ev))
                                />
                                <label class="form__checkbox-label" for="showClosed">
                                    "Показать закрытые"
                                </label>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=reset_filters
                            >
                                {icon("rotate-ccw")}
                                " Сбросить"
                            </Button>
                        </Flex>
                    }
                />

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper" id=TABLE_ID>
                    <Table class="applications-table">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="№ заявки" sort_key="number" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Направление" sort_key="direction" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Наименование" sort_key="name" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="ИНН" sort_key="inn" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Тип объекта" sort_key="objectType" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="Статус" sort_key="status" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Средства ВВ" sort_key="fundVV" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Средства ОДО" sort_key="fundODO" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort align="right" />
                                <SortableHeaderCell label="ЧВ" sort_key="chv" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort align="right" />
                                <SortableHeaderCell label="ВСТ" sort_key="vst" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort align="right" />
                                <TableHeaderCell min_width=120.0>"Документы"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Замечания"</TableHeaderCell>
                                <SortableHeaderCell label="Дата" sort_key="date" current_sort_key=sort_key sort_ascending=sort_ascending on_sort=on_sort min_width=100.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|item| item.number.clone()
                                children=move |item| {
                                    let short_name = item.short_name();
                                    let can_request = item.can_request_documents();
                                    let can_download = item.can_download_remarks();

                                    view! {
                                        <TableRow>
                                            <TableCell>{item.number.clone()}</TableCell>
                                            <TableCell>{item.direction.clone()}</TableCell>
                                            <TableCell>
                                                <span title=item.name.clone()>{short_name}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span style="font-family: monospace;">{item.inn.clone()}</span>
                                            </TableCell>
                                            <TableCell>{item.object_type.clone()}</TableCell>
                                            <TableCell>
                                                <StatusBadge label=item.status.clone() />
                                            </TableCell>
                                            <TableCellMoney value=item.fund_vv />
                                            <TableCellMoney value=item.fund_odo />
                                            <TableCellMoney value=item.chv />
                                            <TableCellMoney value=item.vst />
                                            <TableCell>
                                                {if can_request {
                                                    view! {
                                                        <button class="btn btn-sm btn-outline-primary">
                                                            {icon("download")}
                                                            " Запросить"
                                                        </button>
                                                    }.into_any()
                                                } else {
                                                    view! { <span>"—"</span> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                {if can_download {
                                                    view! {
                                                        <button class="btn btn-sm btn-outline-secondary">
                                                            {icon("file-download")}
                                                            " Скачать"
                                                        </button>
                                                    }.into_any()
                                                } else {
                                                    view! { <span>"—"</span> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>{item.date.clone()}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_all() {
        let store = RecordStore::from_json(
            r#"[
                { "number": "1", "direction": "Строительство" },
                { "number": "2", "direction": "Благоустройство" }
            ]"#,
        )
        .unwrap();

        let options = filter_options(&store, FilterKey::Direction);
        assert_eq!(options[0], (String::new(), "Все".to_string()));
        assert_eq!(options[1].0, "Благоустройство");
        assert_eq!(options.len(), 3);

        let statuses = filter_options(&store, FilterKey::Status);
        assert_eq!(statuses.len(), 7);
        assert_eq!(statuses[4].0, "Принято");
    }
}
