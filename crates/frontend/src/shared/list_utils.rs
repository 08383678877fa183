/// Утилиты для списков: индикаторы сортировки и поле поиска с debounce
use crate::shared::config::grid_config;
use crate::shared::debounce::Debouncer;
use leptos::prelude::*;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
///
/// Ввод применяется через `on_change` только после паузы
/// `search_debounce_ms` с последнего нажатия.
#[component]
pub fn SearchInput(
    /// Применённое значение поиска; его смена снаружи (сброс фильтров)
    /// переписывает поле и отменяет ожидающий ввод
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения поиска
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debouncer = StoredValue::new_local(Debouncer::new(grid_config().search_debounce_ms));

    Effect::new(move |_| {
        let applied = value.get();
        debouncer.with_value(|d| d.cancel());
        set_input_value.set(applied);
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.with_value(|d| {
            d.schedule(move || {
                log::debug!("search applied: {:?}", new_value);
                on_change.run(new_value);
            })
        });
    };

    let clear_filter = move |_| {
        debouncer.with_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                id="searchInput"
                class="form__input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Очистить">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
