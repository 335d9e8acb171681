//! メインアプリケーションコンポーネント
//!
//! 取得 → 絞り込み → 表示 → 編集 → 保存 → 再取得 の流れをシグナルでつなぐ。

use leptos::prelude::*;
use leptos::task::spawn_local;
use vacancy_common::{
    filter_vacancies, Debouncer, EditPanel, Endpoint, Mutation, PriceRange, RequestSequencer,
    Vacancy, VacancyId,
};

use crate::api;
use crate::components::{
    header::Header, price_filter::PriceFilter, vacancy_form::VacancyForm,
    vacancy_list::VacancyList,
};
use crate::config;
use crate::log;
use crate::timer::BrowserScheduler;

/// 一覧取得に必要なハンドル一式
#[derive(Clone, Copy)]
struct ListLoader {
    endpoint: StoredValue<Endpoint>,
    sequencer: StoredValue<RequestSequencer, LocalStorage>,
    set_vacancies: WriteSignal<Vec<Vacancy>>,
    set_loading: WriteSignal<bool>,
}

impl ListLoader {
    /// 一覧を丸ごと取り直す。後から発行した取得があれば結果は捨てる
    async fn reload(self) {
        let ticket = self.sequencer.with_value(|s| s.issue());
        let endpoint = self.endpoint.get_value();
        self.set_loading.set(true);

        let result = api::fetch_vacancies(&endpoint).await;

        if !self.sequencer.with_value(|s| s.is_current(ticket)) {
            log::info("古い一覧レスポンスを破棄");
            return;
        }
        self.set_loading.set(false);

        match result {
            Ok(page) => {
                for reason in &page.skipped {
                    log::warn(&format!("読めないレコードを除外: {}", reason));
                }
                self.set_vacancies.set(page.vacancies);
            }
            Err(e) if e.is_alert() => {
                log::error(&format!("一覧取得失敗: {}", e));
                gloo::dialogs::alert(&format!("Failed to load vacancies: {}", e));
                self.set_vacancies.set(Vec::new());
            }
            Err(e) => {
                log::warn(&format!("一覧レスポンスが不正: {}", e));
                self.set_vacancies.set(Vec::new());
            }
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = config::load();

    // アプリケーション状態
    let (vacancies, set_vacancies) = signal(Vec::<Vacancy>::new());
    let (loading, set_loading) = signal(false);
    let (price_range, set_price_range) = signal(PriceRange::default());
    let (applied_range, set_applied_range) = signal(PriceRange::default());
    let (saving, set_saving) = signal(false);
    let panel = RwSignal::new(EditPanel::default());

    let endpoint = StoredValue::new(Endpoint::new(config.api_base.clone()));
    let loader = ListLoader {
        endpoint,
        sequencer: StoredValue::new_local(RequestSequencer::new()),
        set_vacancies,
        set_loading,
    };
    let debouncer = StoredValue::new_local(Debouncer::new(BrowserScheduler, config.debounce_ms));
    on_cleanup(move || debouncer.update_value(|d| d.cancel()));

    // 表示用の一覧（取得結果か適用中の価格帯が変わるたびに再計算）
    let visible = Signal::derive(move || {
        vacancies.with(|list| filter_vacancies(list, applied_range.get()))
    });

    spawn_local(loader.reload());

    // スライダー変更ハンドラ（満了時点のスライダー値をまとめて適用）
    let on_price_change = move |range: PriceRange| {
        set_price_range.set(range);
        debouncer.update_value(|d| {
            d.trigger(move || set_applied_range.set(price_range.get_untracked()));
        });
    };

    // 作成/更新/削除の実行。成功したら再取得してからパネルを閉じる
    let run_mutation = move |mutation: Mutation| {
        set_saving.set(true);
        spawn_local(async move {
            let result = api::execute(&mutation, &endpoint.get_value()).await;
            set_saving.set(false);

            match result {
                Ok(()) => {
                    loader.reload().await;
                    panel.update(|p| p.close());
                }
                Err(e) => {
                    log::error(&format!("保存失敗: {}", e));
                    gloo::dialogs::alert(&e.to_string());
                }
            }
        });
    };

    let on_new = move |_: ()| panel.update(|p| p.open(None));
    let on_edit = move |vacancy: Vacancy| panel.update(|p| p.open(Some(&vacancy)));
    let on_close = move |_: ()| panel.update(|p| p.close());

    let on_save = move |_: ()| {
        if let Some(mutation) = panel.try_update(|p| p.submit()).flatten() {
            run_mutation(mutation);
        }
    };

    let on_delete = move |id: VacancyId| {
        if gloo::dialogs::confirm("Delete this vacancy?") {
            run_mutation(Mutation::Delete(id));
        }
    };

    view! {
        <div class="container">
            <Header on_new=on_new saving=saving />

            <PriceFilter
                range=price_range
                applied=applied_range
                on_change=on_price_change
            />

            <VacancyList
                vacancies=visible
                loading=loading
                saving=saving
                on_edit=on_edit
                on_delete=on_delete
            />

            <VacancyForm
                panel=panel
                saving=saving
                on_save=on_save
                on_close=on_close
                on_delete=on_delete
            />
        </div>
    }
}
