use contracts::shared::list_view::{PageToken, PageTokenKind, PaginationView};
use leptos::prelude::*;

/// PaginationControls component - пагинатор с окном страниц и выбором размера
///
/// Раскладку (страницы, многоточия, «/») строит `paginate`; компонент
/// только рисует токены и сообщает о кликах.
#[component]
pub fn PaginationControls(
    /// Раскладка для текущей страницы
    #[prop(into)]
    pagination: Signal<PaginationView>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes (1-based)
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(20);

    view! {
        <div class="pagination-controls">
            <ul class="pagination" id="pagination">
                <For
                    each=move || pagination.get().tokens.into_iter().enumerate()
                    key=|(index, token)| (*index, *token)
                    children=move |(_, token)| view! {
                        <PageTokenItem token=token on_page_change=on_page_change />
                    }
                />
            </ul>
            <span class="pagination-info" id="pageInfo">
                {move || pagination.with(|p| p.page_info())}
            </span>
            <select
                class="page-size-select"
                id="pageSize"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn PageTokenItem(token: PageToken, on_page_change: Callback<usize>) -> impl IntoView {
    let mut class = String::from("page-item");
    if token.disabled {
        class.push_str(" disabled");
    }
    if token.active {
        class.push_str(" active");
    }

    let label = match token.kind {
        PageTokenKind::Prev => "«".to_string(),
        PageTokenKind::Next => "»".to_string(),
        PageTokenKind::Ellipsis => "...".to_string(),
        PageTokenKind::Page => token.page.map(|p| p.to_string()).unwrap_or_default(),
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if token.disabled {
            return;
        }
        if let Some(page) = token.page {
            on_page_change.run(page);
        }
    };

    view! {
        <li class=class>
            <a class="page-link" href="#" on:click=on_click>{label}</a>
        </li>
    }
}
