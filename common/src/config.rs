//! アプリ設定

use serde::{Deserialize, Serialize};

use crate::debounce::DEBOUNCE_MS;
use crate::error::Result;

/// 画面設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 求人APIのベースURL
    pub api_base: String,
    /// 価格スライダーのデバウンス間隔（ミリ秒）
    pub debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/vacancy".into(),
            debounce_ms: DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// JSON文字列から読み込み（未指定の項目は既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}
