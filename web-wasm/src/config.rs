//! 画面設定の読み込み
//!
//! `<meta name="vacancy-board-config" content='{"api_base": "..."}'>` があれば上書きする。

use vacancy_common::AppConfig;

use crate::log;

const META_NAME: &str = "vacancy-board-config";

/// 設定を読み込む。metaタグがない・壊れている場合は既定値
pub fn load() -> AppConfig {
    let Some(content) = read_meta() else {
        return AppConfig::default();
    };

    AppConfig::from_json(&content).unwrap_or_else(|e| {
        log::warn(&format!("{} を読めないため既定値を使用: {}", META_NAME, e));
        AppConfig::default()
    })
}

fn read_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", META_NAME);
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
