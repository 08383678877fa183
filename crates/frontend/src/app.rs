use crate::domain::a001_application::ui::list::ApplicationList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app-main">
                <ApplicationList />
            </main>
        </ConfigProvider>
    }
}
