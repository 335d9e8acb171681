//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_new: F, saving: ReadSignal<bool>) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"Vacancies"</h1>
            <button
                class="btn btn-primary"
                disabled=move || saving.get()
                on:click=move |_| on_new(())
            >
                "New vacancy"
            </button>
        </header>
    }
}
