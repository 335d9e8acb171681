//! 求人編集パネル（スライドアウト）
//!
//! 下書きとエラーは親が持つ `EditPanel` シグナルにあり、ここでは表示と入力の中継だけ行う。

use leptos::prelude::*;
use vacancy_common::{
    validation, EditPanel, ShiftDraft, ShiftField, ShiftType, VacancyDraft, VacancyId,
};

#[component]
pub fn VacancyForm<FS, FC, FD>(
    panel: RwSignal<EditPanel>,
    saving: ReadSignal<bool>,
    on_save: FS,
    on_close: FC,
    on_delete: FD,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FD: Fn(VacancyId) + 'static + Clone + Send + Sync,
{
    let (new_date, set_new_date) = signal(String::new());

    let is_open = move || panel.with(|p| p.is_open());
    let existing_id = move || panel.with(|p| p.draft().and_then(|d| d.id.clone()));
    let heading = move || {
        if existing_id().is_some() { "Edit vacancy" } else { "New vacancy" }
    };
    let draft_text = move |f: fn(&VacancyDraft) -> String| {
        panel.with(|p| p.draft().map(f).unwrap_or_default())
    };
    let error = move |key: &'static str| {
        move || panel.with(|p| p.errors().get(key).map(str::to_string))
    };
    let shift_dates = move || {
        panel.with(|p| {
            p.draft()
                .map(|d| d.shifts.iter().map(|s| s.date.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let add_shift = move || {
        let date = new_date.get_untracked();
        let added = panel
            .try_update(|p| p.edit(|d| d.add_shift(&date)))
            .flatten()
            .unwrap_or(false);
        if added {
            set_new_date.set(String::new());
        }
    };

    view! {
        <aside class="form-panel" class:open=is_open>
            <div class="form-panel-header">
                <h2>{heading}</h2>
                <button
                    class="btn btn-small btn-tertiary"
                    on:click={
                        let on_close = on_close.clone();
                        move |_| on_close(())
                    }
                >
                    "Close"
                </button>
            </div>

            <div class="form-group">
                <label for="vacancy-title">"Title"</label>
                <input
                    type="text"
                    id="vacancy-title"
                    prop:value=move || draft_text(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|p| {
                            p.edit(move |d| d.title = value);
                        });
                    }
                />
                <FieldError message=error(validation::TITLE) />
            </div>

            <div class="form-group">
                <label for="vacancy-description">"Description"</label>
                <textarea
                    id="vacancy-description"
                    prop:value=move || draft_text(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|p| {
                            p.edit(move |d| d.description = value);
                        });
                    }
                />
                <FieldError message=error(validation::DESCRIPTION) />
            </div>

            <div class="form-group add-shift">
                <label for="new-shift-date">"Shift date"</label>
                <input
                    type="date"
                    id="new-shift-date"
                    prop:value=move || new_date.get()
                    on:input=move |ev| set_new_date.set(event_target_value(&ev))
                />
                <button class="btn btn-small btn-secondary" on:click=move |_| add_shift()>
                    "Add shift"
                </button>
                <FieldError message=error(validation::SHIFTS) />
            </div>

            <div class="shift-rows">
                <For
                    each=shift_dates
                    key=|date| date.clone()
                    children=move |date| view! { <ShiftRow date=date panel=panel /> }
                />
            </div>

            <div class="form-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || saving.get()
                    on:click={
                        let on_save = on_save.clone();
                        move |_| on_save(())
                    }
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <Show when=move || existing_id().is_some()>
                    <button
                        class="btn btn-tertiary"
                        disabled=move || saving.get()
                        on:click={
                            let on_delete = on_delete.clone();
                            move |_| {
                                if let Some(id) = existing_id() {
                                    on_delete(id);
                                }
                            }
                        }
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </aside>
    }
}

/// シフト1行
///
/// 行は日付で識別する（追加後は日付を変更できないため）。
#[component]
fn ShiftRow(date: String, panel: RwSignal<EditPanel>) -> impl IntoView {
    let current = {
        let date = date.clone();
        move || {
            panel.with(|p| {
                p.draft().and_then(|d| {
                    d.shifts
                        .iter()
                        .position(|s| s.date == date)
                        .map(|i| (i, d.shifts[i].clone()))
                })
            })
        }
    };
    let index_now = {
        let date = date.clone();
        move || {
            panel.with_untracked(|p| {
                p.draft().and_then(|d| d.shifts.iter().position(|s| s.date == date))
            })
        }
    };

    let read = {
        let current = current.clone();
        move |f: fn(&ShiftDraft) -> String| current().map(|(_, s)| f(&s)).unwrap_or_default()
    };
    let update = {
        let index_now = index_now.clone();
        move |field: ShiftField| {
            if let Some(index) = index_now() {
                panel.update(|p| {
                    p.edit(|d| d.update_shift(index, field));
                });
            }
        }
    };
    let row_error = {
        let current = current.clone();
        move |key: fn(usize) -> String| {
            let current = current.clone();
            move || {
                let (index, _) = current()?;
                panel.with(|p| p.errors().get(&key(index)).map(str::to_string))
            }
        }
    };

    let time_error = row_error(validation::time_key);
    let price_error = row_error(validation::price_key);
    let selected_type = {
        let current = current.clone();
        move || current().map(|(_, s)| s.shift_type).unwrap_or_default()
    };

    view! {
        <div class="shift-row">
            <span class="shift-date">{date}</span>

            <input
                type="time"
                prop:value={
                    let read = read.clone();
                    move || read(|s| s.start_time.clone())
                }
                on:input={
                    let update = update.clone();
                    move |ev| update(ShiftField::StartTime(event_target_value(&ev)))
                }
            />
            <input
                type="time"
                prop:value={
                    let read = read.clone();
                    move || read(|s| s.end_time.clone())
                }
                on:input={
                    let update = update.clone();
                    move |ev| update(ShiftField::EndTime(event_target_value(&ev)))
                }
            />

            <select on:change={
                let update = update.clone();
                move |ev| {
                    if let Some(shift_type) = ShiftType::parse(&event_target_value(&ev)) {
                        update(ShiftField::Type(shift_type));
                    }
                }
            }>
                {ShiftType::ALL
                    .into_iter()
                    .map(|t| {
                        let selected_type = selected_type.clone();
                        view! {
                            <option value=t.as_str() selected=move || selected_type() == t>
                                {t.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <input
                type="number"
                min="1"
                step="1"
                prop:value={
                    let read = read.clone();
                    move || read(|s| s.price.clone())
                }
                on:input={
                    let update = update.clone();
                    move |ev| update(ShiftField::Price(event_target_value(&ev)))
                }
            />

            <button
                class="btn btn-small btn-tertiary"
                on:click={
                    let index_now = index_now.clone();
                    move |_| {
                        if let Some(index) = index_now() {
                            panel.update(|p| {
                                p.edit(|d| d.remove_shift(index));
                            });
                        }
                    }
                }
            >
                "Remove"
            </button>

            <FieldError message=time_error />
            <FieldError message=price_error />
        </div>
    }
}

/// フィールド直下のエラーメッセージ
#[component]
fn FieldError<F>(message: F) -> impl IntoView
where
    F: Fn() -> Option<String> + 'static + Send + Sync,
{
    view! {
        <p class="field-error">{move || message().unwrap_or_default()}</p>
    }
}
