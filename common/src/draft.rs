//! 編集パネルの下書き
//!
//! パネルを開いている間だけ存在する、未保存の求人コピー。
//! シフト行はUI表記（日付 YYYY-MM-DD）で保持し、保存時にワイヤ形式へ変換する。

use std::collections::HashSet;

use crate::datetime::{minutes_since_midnight, normalize_time, ui_date_to_wire, wire_date_to_ui};
use crate::error::{Error, Result};
use crate::types::{ShiftType, Vacancy, VacancyId, VacancyPayload, WireShift};
use crate::validation::{self, ValidationErrors};

pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "17:00";
pub const DEFAULT_PRICE: &str = "100";

/// シフト行の編集可能フィールド（日付は追加後固定）
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftField {
    StartTime(String),
    EndTime(String),
    Type(ShiftType),
    Price(String),
}

/// シフト行の下書き
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDraft {
    /// YYYY-MM-DD
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub shift_type: ShiftType,
    /// 入力値そのまま（検証時に数値化）
    pub price: String,
}

impl ShiftDraft {
    fn with_defaults(date: &str) -> Self {
        Self {
            date: date.to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            shift_type: ShiftType::default(),
            price: DEFAULT_PRICE.to_string(),
        }
    }

    /// ワイヤ形式から変換。解釈できない値は元の文字列のまま残す
    fn from_wire(shift: &WireShift) -> Self {
        Self {
            date: wire_date_to_ui(&shift.date).unwrap_or_else(|_| shift.date.clone()),
            start_time: normalize_time(&shift.start_time).unwrap_or_else(|_| shift.start_time.clone()),
            end_time: normalize_time(&shift.end_time).unwrap_or_else(|_| shift.end_time.clone()),
            shift_type: shift.shift_type,
            price: shift.price.to_string(),
        }
    }

    fn to_wire(&self, index: usize) -> Result<WireShift> {
        let Some(price) = parse_price(&self.price) else {
            let mut errors = ValidationErrors::default();
            errors.insert(validation::price_key(index), "Price must be a positive number");
            return Err(Error::Invalid(errors));
        };
        Ok(WireShift {
            date: ui_date_to_wire(&self.date)?,
            start_time: normalize_time(&self.start_time)?,
            end_time: normalize_time(&self.end_time)?,
            shift_type: self.shift_type,
            price: i64::from(price),
        })
    }
}

/// 求人の下書き
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyDraft {
    /// 新規作成ならNone
    pub id: Option<VacancyId>,
    pub title: String,
    pub description: String,
    pub shifts: Vec<ShiftDraft>,
}

impl VacancyDraft {
    /// 空の下書き（新規作成）
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の求人から下書きを作成（日付昇順）
    ///
    /// 同じ日付のシフトが複数あれば最初の1件だけ残す
    pub fn from_vacancy(vacancy: &Vacancy) -> Self {
        let mut seen = HashSet::new();
        let shifts = vacancy
            .shifts
            .iter()
            .map(ShiftDraft::from_wire)
            .filter(|s| seen.insert(s.date.clone()))
            .collect();

        let mut draft = Self {
            id: Some(vacancy.id.clone()),
            title: vacancy.title.clone(),
            description: vacancy.description.clone(),
            shifts,
        };
        draft.sort_shifts();
        draft
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// シフト行を追加
    ///
    /// 空の日付・既存の日付は無視して `false` を返す
    pub fn add_shift(&mut self, date: &str) -> bool {
        let date = date.trim();
        if date.is_empty() || self.shifts.iter().any(|s| s.date == date) {
            return false;
        }
        self.shifts.push(ShiftDraft::with_defaults(date));
        self.sort_shifts();
        true
    }

    /// シフト行を削除（範囲外は無視）
    pub fn remove_shift(&mut self, index: usize) -> Option<ShiftDraft> {
        (index < self.shifts.len()).then(|| self.shifts.remove(index))
    }

    /// シフト行の1フィールドを更新（範囲外は無視）
    pub fn update_shift(&mut self, index: usize, field: ShiftField) {
        let Some(shift) = self.shifts.get_mut(index) else {
            return;
        };
        match field {
            ShiftField::StartTime(v) => shift.start_time = v,
            ShiftField::EndTime(v) => shift.end_time = v,
            ShiftField::Type(v) => shift.shift_type = v,
            ShiftField::Price(v) => shift.price = v,
        }
    }

    /// 日付昇順に並べ替え
    ///
    /// 文字列の辞書順で比較する。YYYY-MM-DD（固定幅）前提でのみ正しい
    fn sort_shifts(&mut self) {
        self.shifts.sort_by(|a, b| a.date.cmp(&b.date));
    }

    /// 全ルールを評価してエラー集合を作り直す（途中で打ち切らない）
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(validation::TITLE, "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.insert(validation::DESCRIPTION, "Description is required");
        }
        if self.shifts.is_empty() {
            errors.insert(validation::SHIFTS, "At least one shift is required");
        }

        for (index, shift) in self.shifts.iter().enumerate() {
            if parse_price(&shift.price).is_none() {
                errors.insert(validation::price_key(index), "Price must be a positive number");
            }

            let start = minutes_since_midnight(&shift.start_time);
            let end = minutes_since_midnight(&shift.end_time);
            match (start, end) {
                (Ok(start), Ok(end)) if end > start => {}
                (Ok(_), Ok(_)) => {
                    errors.insert(validation::time_key(index), "End time must be after start time");
                }
                _ => {
                    errors.insert(validation::time_key(index), "Enter a valid start and end time");
                }
            }
        }

        errors
    }

    /// 検証してワイヤ形式のボディを作成
    pub fn to_payload(&self) -> Result<VacancyPayload> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(Error::Invalid(errors));
        }

        let shifts = self
            .shifts
            .iter()
            .enumerate()
            .map(|(index, shift)| shift.to_wire(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(VacancyPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            shifts,
        })
    }
}

/// 正の整数として解釈できる価格
fn parse_price(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&p| p > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_shift(start: &str, end: &str, price: &str) -> VacancyDraft {
        VacancyDraft {
            id: None,
            title: "A".to_string(),
            description: "B".to_string(),
            shifts: vec![ShiftDraft {
                date: "2025-01-02".to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                shift_type: ShiftType::Consultation,
                price: price.to_string(),
            }],
        }
    }

    // =============================================
    // 行の追加・削除・更新
    // =============================================

    #[test]
    fn test_add_shift_defaults_and_sorting() {
        let mut draft = VacancyDraft::new();
        assert!(draft.add_shift("2025-03-01"));
        assert!(draft.add_shift("2025-01-15"));
        assert!(draft.add_shift("2025-02-10"));

        let dates: Vec<&str> = draft.shifts.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-15", "2025-02-10", "2025-03-01"]);

        let first = &draft.shifts[0];
        assert_eq!(first.start_time, DEFAULT_START_TIME);
        assert_eq!(first.end_time, DEFAULT_END_TIME);
        assert_eq!(first.shift_type, ShiftType::Consultation);
        assert_eq!(first.price, DEFAULT_PRICE);
    }

    #[test]
    fn test_add_duplicate_date_is_noop() {
        let mut draft = VacancyDraft::new();
        assert!(draft.add_shift("2025-01-02"));
        draft.update_shift(0, ShiftField::Price("250".into()));

        assert!(!draft.add_shift("2025-01-02"));
        assert_eq!(draft.shifts.len(), 1);
        assert_eq!(draft.shifts[0].price, "250");
    }

    #[test]
    fn test_add_empty_date_is_noop() {
        let mut draft = VacancyDraft::new();
        assert!(!draft.add_shift(""));
        assert!(!draft.add_shift("   "));
        assert!(draft.shifts.is_empty());
    }

    #[test]
    fn test_remove_shift() {
        let mut draft = VacancyDraft::new();
        draft.add_shift("2025-01-01");
        draft.add_shift("2025-01-02");

        let removed = draft.remove_shift(0).expect("削除失敗");
        assert_eq!(removed.date, "2025-01-01");
        assert_eq!(draft.shifts.len(), 1);
        assert!(draft.remove_shift(5).is_none());
    }

    #[test]
    fn test_update_shift_fields() {
        let mut draft = VacancyDraft::new();
        draft.add_shift("2025-01-01");
        draft.update_shift(0, ShiftField::StartTime("07:30".into()));
        draft.update_shift(0, ShiftField::EndTime("12:00".into()));
        draft.update_shift(0, ShiftField::Type(ShiftType::Emergency));
        draft.update_shift(3, ShiftField::Price("1".into()));

        let shift = &draft.shifts[0];
        assert_eq!(shift.start_time, "07:30");
        assert_eq!(shift.end_time, "12:00");
        assert_eq!(shift.shift_type, ShiftType::Emergency);
        assert_eq!(shift.price, DEFAULT_PRICE);
    }

    // =============================================
    // from_vacancy
    // =============================================

    #[test]
    fn test_from_vacancy_reformats_and_sorts() {
        let json = r#"{
            "id": 3,
            "title": "Clinic",
            "description": "Day shifts",
            "swifts": [
                {"date": "05-02-2025", "start_time": "10:00:00", "end_time": "14:00:00", "type": "Telephone", "price": 80},
                {"date": "28-01-2025", "start_time": "08:00", "end_time": "12:00", "type": "Emergency", "price": 300}
            ]
        }"#;
        let vacancy: Vacancy = serde_json::from_str(json).expect("デシリアライズ失敗");
        let draft = VacancyDraft::from_vacancy(&vacancy);

        assert_eq!(draft.id, Some(VacancyId::Number(3)));
        assert!(!draft.is_new());
        assert_eq!(draft.shifts[0].date, "2025-01-28");
        assert_eq!(draft.shifts[0].price, "300");
        assert_eq!(draft.shifts[1].date, "2025-02-05");
        assert_eq!(draft.shifts[1].start_time, "10:00");
        assert_eq!(draft.shifts[1].end_time, "14:00");
    }

    #[test]
    fn test_from_vacancy_keeps_first_of_duplicate_dates() {
        let json = r#"{
            "id": 4,
            "swifts": [
                {"date": "05-02-2025", "start_time": "08:00", "end_time": "12:00", "type": "Telephone", "price": 80},
                {"date": "01-02-2025", "start_time": "08:00", "end_time": "12:00", "type": "Consultation", "price": 60},
                {"date": "2025-02-05", "start_time": "13:00", "end_time": "18:00", "type": "Emergency", "price": 200}
            ]
        }"#;
        let vacancy: Vacancy = serde_json::from_str(json).expect("デシリアライズ失敗");
        let draft = VacancyDraft::from_vacancy(&vacancy);

        let dates: Vec<&str> = draft.shifts.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-02-01", "2025-02-05"]);
        assert_eq!(draft.shifts[1].shift_type, ShiftType::Telephone);
        assert_eq!(draft.shifts[1].price, "80");
    }

    // =============================================
    // validate
    // =============================================

    #[test]
    fn test_validate_empty_draft_reports_all_top_level() {
        let errors = VacancyDraft::new().validate();
        assert!(errors.contains(validation::TITLE));
        assert!(errors.contains(validation::DESCRIPTION));
        assert!(errors.contains(validation::SHIFTS));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_end_before_start() {
        let errors = draft_with_shift("09:00", "08:00", "10").validate();
        assert!(errors.contains("time-0"));
        assert!(!errors.contains("price-0"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_end_equal_start() {
        let errors = draft_with_shift("09:00", "09:00", "10").validate();
        assert!(errors.contains("time-0"));
    }

    #[test]
    fn test_validate_price_rules() {
        for bad in ["", "0", "-5", "abc", "12.5"] {
            let errors = draft_with_shift("09:00", "10:00", bad).validate();
            assert!(errors.contains("price-0"), "価格 {:?} が通ってしまう", bad);
        }
        assert!(draft_with_shift("09:00", "10:00", " 15 ").validate().is_empty());
    }

    #[test]
    fn test_validate_unparsable_time() {
        let errors = draft_with_shift("", "10:00", "10").validate();
        assert!(errors.contains("time-0"));
    }

    #[test]
    fn test_validate_does_not_short_circuit() {
        let mut draft = draft_with_shift("10:00", "09:00", "0");
        draft.title = "  ".to_string();
        draft.add_shift("2025-01-03");
        draft.update_shift(1, ShiftField::Price("x".into()));

        let errors = draft.validate();
        assert!(errors.contains("title"));
        assert!(errors.contains("price-0"));
        assert!(errors.contains("time-0"));
        assert!(errors.contains("price-1"));
        assert!(!errors.contains("time-1"));
    }

    // =============================================
    // to_payload
    // =============================================

    #[test]
    fn test_to_payload_wire_format() {
        let mut draft = draft_with_shift("09:00", "17:30", "120");
        draft.title = "  Locum  ".to_string();
        let payload = draft.to_payload().expect("変換失敗");

        assert_eq!(payload.title, "Locum");
        assert_eq!(payload.shifts.len(), 1);
        assert_eq!(payload.shifts[0].date, "02-01-2025");
        assert_eq!(payload.shifts[0].end_time, "17:30");
        assert_eq!(payload.shifts[0].price, 120);
    }

    #[test]
    fn test_to_payload_rejects_invalid() {
        let draft = draft_with_shift("09:00", "08:00", "10");
        match draft.to_payload() {
            Err(Error::Invalid(errors)) => assert!(errors.contains("time-0")),
            other => panic!("想定外: {:?}", other),
        }
    }

    #[test]
    fn test_to_payload_bad_date() {
        let mut draft = draft_with_shift("09:00", "10:00", "10");
        draft.shifts[0].date = "not-a-date".to_string();
        assert!(matches!(draft.to_payload(), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_to_wire_rejects_unreadable_price() {
        let mut shift = ShiftDraft::with_defaults("2025-01-02");
        shift.price = "12.5".to_string();
        match shift.to_wire(3) {
            Err(Error::Invalid(errors)) => assert!(errors.contains("price-3")),
            other => panic!("想定外: {:?}", other),
        }

        shift.price = " 42 ".to_string();
        assert_eq!(shift.to_wire(0).expect("変換失敗").price, 42);
    }
}
