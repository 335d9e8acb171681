//! 日付・時刻の表記変換
//!
//! UI（`<input type="date">`）は YYYY-MM-DD、APIは DD-MM-YYYY を使う。
//! 時刻はどちらも HH:MM。

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{Error, Result};

const UI_DATE: &str = "%Y-%m-%d";
const WIRE_DATE: &str = "%d-%m-%Y";
const TIME: &str = "%H:%M";

/// YYYY-MM-DD → DD-MM-YYYY
pub fn ui_date_to_wire(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date.trim(), UI_DATE)
        .map_err(|_| Error::InvalidDate(date.to_string()))?;
    Ok(parsed.format(WIRE_DATE).to_string())
}

/// DD-MM-YYYY → YYYY-MM-DD
///
/// 既にYYYY-MM-DDで届いた場合はそのまま受け付ける
pub fn wire_date_to_ui(date: &str) -> Result<String> {
    let trimmed = date.trim();
    NaiveDate::parse_from_str(trimmed, WIRE_DATE)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, UI_DATE))
        .map(|d| d.format(UI_DATE).to_string())
        .map_err(|_| Error::InvalidDate(date.to_string()))
}

/// HH:MM または HH:MM:SS を HH:MM に揃える
pub fn normalize_time(time: &str) -> Result<String> {
    parse_time(time).map(|t| t.format(TIME).to_string())
}

/// 0時からの経過分
pub fn minutes_since_midnight(time: &str) -> Result<u32> {
    let t = parse_time(time)?;
    Ok(t.hour() * 60 + t.minute())
}

fn parse_time(time: &str) -> Result<NaiveTime> {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, TIME)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| Error::InvalidTime(time.to_string()))
}
