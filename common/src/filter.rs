//! 価格帯によるクライアント側フィルタ
//!
//! 取得済み一覧と（デバウンス後の）価格帯から表示用の一覧を導出する純関数。

use serde::{Deserialize, Serialize};

use crate::types::Vacancy;

/// スライダーの下限
pub const PRICE_FLOOR: u32 = 0;
/// スライダーの上限
pub const PRICE_CEILING: u32 = 1000;

/// 価格帯（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// 初期値（全範囲）のままか
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn contains(&self, price: i64) -> bool {
        i64::from(self.min) <= price && price <= i64::from(self.max)
    }

    /// 下限を変更。上限を追い越した場合は上限も引きずる
    pub fn with_min(self, min: u32) -> Self {
        let min = min.clamp(PRICE_FLOOR, PRICE_CEILING);
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// 上限を変更。下限を下回った場合は下限も引きずる
    pub fn with_max(self, max: u32) -> Self {
        let max = max.clamp(PRICE_FLOOR, PRICE_CEILING);
        Self {
            min: self.min.min(max),
            max,
        }
    }
}

/// 表示対象の求人を抽出
///
/// - シフトのない求人は常に除外
/// - 全範囲以外なら、価格帯に入るシフトを1件以上持つ求人のみ
pub fn filter_vacancies(raw: &[Vacancy], range: PriceRange) -> Vec<Vacancy> {
    let full_range = range.is_default();

    raw.iter()
        .filter(|v| v.has_shifts())
        .filter(|v| full_range || v.shifts.iter().any(|s| range.contains(s.price)))
        .cloned()
        .collect()
}
