use contracts::domain::a001_application::ApplicationStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}

/// Бейдж статуса заявки; цвет задаёт класс `status-{style_class}`
#[component]
pub fn StatusBadge(
    /// Статус как он записан в заявке
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let class = format!(
        "status-badge status-{}",
        ApplicationStatus::from_label(&label).style_class()
    );

    view! {
        <span class=class>{label}</span>
    }
}
