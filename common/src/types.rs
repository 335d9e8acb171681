//! 求人（Vacancy）とシフトの型定義
//!
//! APIとの送受信に使う型:
//! - Vacancy: 一覧取得の1件
//! - WireShift: ワイヤ形式のシフト（日付は DD-MM-YYYY）
//! - VacancyPayload: 作成/更新リクエストのボディ
//!
//! シフト配列のワイヤ上のキーは `swifts`。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 求人ID（サーバにより数値/文字列のどちらもありうる）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VacancyId {
    Number(u64),
    Text(String),
}

impl fmt::Display for VacancyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VacancyId::Number(n) => write!(f, "{}", n),
            VacancyId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for VacancyId {
    fn from(value: u64) -> Self {
        VacancyId::Number(value)
    }
}

/// シフト区分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    #[default]
    Consultation,
    Telephone,
    Ambulance,
    Emergency,
}

impl ShiftType {
    pub const ALL: [ShiftType; 4] = [
        ShiftType::Consultation,
        ShiftType::Telephone,
        ShiftType::Ambulance,
        ShiftType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Consultation => "Consultation",
            ShiftType::Telephone => "Telephone",
            ShiftType::Ambulance => "Ambulance",
            ShiftType::Emergency => "Emergency",
        }
    }

    /// `<select>` の値から復元
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// ワイヤ形式のシフト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireShift {
    /// DD-MM-YYYY
    pub date: String,
    /// HH:MM
    pub start_time: String,
    /// HH:MM
    pub end_time: String,
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    #[serde(default)]
    pub price: i64,
}

/// 求人
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: VacancyId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "swifts", alias = "shifts", default)]
    pub shifts: Vec<WireShift>,
}

impl Vacancy {
    pub fn has_shifts(&self) -> bool {
        !self.shifts.is_empty()
    }

    /// 最安値と最高値（シフトなしならNone）
    pub fn price_span(&self) -> Option<(i64, i64)> {
        let min = self.shifts.iter().map(|s| s.price).min()?;
        let max = self.shifts.iter().map(|s| s.price).max()?;
        Some((min, max))
    }
}

/// POST/PUT のリクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "swifts")]
    pub shifts: Vec<WireShift>,
}
