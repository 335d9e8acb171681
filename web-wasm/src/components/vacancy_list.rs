//! 求人一覧コンポーネント

use leptos::prelude::*;
use vacancy_common::{Vacancy, VacancyId, WireShift};

#[component]
pub fn VacancyList<FE, FD>(
    vacancies: Signal<Vec<Vacancy>>,
    loading: ReadSignal<bool>,
    saving: ReadSignal<bool>,
    on_edit: FE,
    on_delete: FD,
) -> impl IntoView
where
    FE: Fn(Vacancy) + 'static + Clone + Send + Sync,
    FD: Fn(VacancyId) + 'static + Clone + Send + Sync,
{
    let is_empty = move || vacancies.with(|list| list.is_empty());

    view! {
        <div class="vacancy-list">
            <Show when=move || loading.get()>
                <p class="text-muted">"Loading vacancies..."</p>
            </Show>

            <Show when=move || !loading.get() && is_empty()>
                <p class="text-muted">"No vacancies match the current filter"</p>
            </Show>

            {move || {
                vacancies
                    .get()
                    .into_iter()
                    .map(|vacancy| {
                        view! {
                            <VacancyCard
                                vacancy=vacancy
                                saving=saving
                                on_edit=on_edit.clone()
                                on_delete=on_delete.clone()
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn VacancyCard<FE, FD>(
    vacancy: Vacancy,
    saving: ReadSignal<bool>,
    on_edit: FE,
    on_delete: FD,
) -> impl IntoView
where
    FE: Fn(Vacancy) + 'static + Clone + Send + Sync,
    FD: Fn(VacancyId) + 'static + Clone + Send + Sync,
{
    let price_label = match vacancy.price_span() {
        Some((min, max)) if min == max => format!("{}", min),
        Some((min, max)) => format!("{} - {}", min, max),
        None => "-".to_string(),
    };
    let shift_count = format!("{} shift(s)", vacancy.shifts.len());
    let title = vacancy.title.clone();
    let description = vacancy.description.clone();
    let shifts = vacancy.shifts.clone();
    let id = vacancy.id.clone();

    view! {
        <div class="vacancy-card">
            <div class="vacancy-info">
                <h3>{title}</h3>
                <p>{description}</p>
                <div class="vacancy-meta">
                    <span class="shift-count">{shift_count}</span>
                    <span class="price-badge">{price_label}</span>
                </div>
                <ul class="shift-summary">
                    {shifts.into_iter().map(shift_line).collect_view()}
                </ul>
            </div>
            <div class="vacancy-actions">
                <button
                    class="btn btn-small btn-secondary"
                    disabled=move || saving.get()
                    on:click=move |_| on_edit(vacancy.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-small btn-tertiary"
                    disabled=move || saving.get()
                    on:click=move |_| on_delete(id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

fn shift_line(shift: WireShift) -> impl IntoView {
    view! {
        <li>
            {format!(
                "{} {}-{} {} ({})",
                shift.date,
                shift.start_time,
                shift.end_time,
                shift.shift_type.as_str(),
                shift.price,
            )}
        </li>
    }
}
