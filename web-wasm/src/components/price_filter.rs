//! 価格帯スライダー
//!
//! スライダーの値は即時に反映し、一覧への適用はデバウンス後（親側で制御）。

use leptos::prelude::*;
use vacancy_common::{PriceRange, PRICE_CEILING, PRICE_FLOOR};

#[component]
pub fn PriceFilter<F>(
    range: ReadSignal<PriceRange>,
    applied: ReadSignal<PriceRange>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(PriceRange) + 'static + Clone + Send + Sync,
{
    let is_pending = move || range.get() != applied.get();

    view! {
        <div class="price-filter">
            <div class="form-group">
                <label for="price-min">
                    {move || format!("Min price: {}", range.get().min)}
                </label>
                <input
                    type="range"
                    id="price-min"
                    min=PRICE_FLOOR.to_string()
                    max=PRICE_CEILING.to_string()
                    prop:value=move || range.get().min.to_string()
                    on:input={
                        let on_change = on_change.clone();
                        move |ev| {
                            if let Ok(min) = event_target_value(&ev).parse::<u32>() {
                                on_change(range.get_untracked().with_min(min));
                            }
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="price-max">
                    {move || format!("Max price: {}", range.get().max)}
                </label>
                <input
                    type="range"
                    id="price-max"
                    min=PRICE_FLOOR.to_string()
                    max=PRICE_CEILING.to_string()
                    prop:value=move || range.get().max.to_string()
                    on:input={
                        let on_change = on_change.clone();
                        move |ev| {
                            if let Ok(max) = event_target_value(&ev).parse::<u32>() {
                                on_change(range.get_untracked().with_max(max));
                            }
                        }
                    }
                />
            </div>

            <button
                class="btn btn-tertiary btn-small"
                disabled=move || range.get().is_default()
                on:click={
                    let on_change = on_change.clone();
                    move |_| on_change(PriceRange::default())
                }
            >
                "Reset"
            </button>

            <Show when=is_pending>
                <span class="text-muted">"Updating..."</span>
            </Show>
        </div>
    }
}
