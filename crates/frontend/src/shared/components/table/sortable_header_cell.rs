//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Дата"
//!     sort_key="date"
//!     current_sort_key=Signal::derive(move || state.with(|s| s.view.sort_column.key().to_string()))
//!     sort_ascending=Signal::derive(move || state.with(|s| s.view.sort_direction.is_ascending()))
//!     on_sort=Callback::new(move |key| toggle_sort(key))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки: клик переключает сортировку, справа индикатор (▲▼⇅)
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки (имя поля заявки)
    sort_key: &'static str,

    /// Текущая колонка сортировки из state
    #[prop(into)]
    current_sort_key: Signal<String>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                data-sort=sort_key
                on:click=move |_| on_sort.run(sort_key.to_string())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_key.get(), sort_key)>
                    {move || {
                        get_sort_indicator(&current_sort_key.get(), sort_key, sort_ascending.get())
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
