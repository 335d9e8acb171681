//! バリデーションエラー集合
//!
//! キーはフォーム上のフィールドを指す。行単位のエラーは `price-<index>` /
//! `time-<index>` の複合キーを使う。検証のたびに丸ごと作り直し、差分マージはしない。

use std::collections::BTreeMap;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const SHIFTS: &str = "shifts";

/// 行の価格エラーキー
pub fn price_key(index: usize) -> String {
    format!("price-{}", index)
}

/// 行の時間帯エラーキー
pub fn time_key(index: usize) -> String {
    format!("time-{}", index)
}

/// フィールドキー → メッセージ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(key.into(), message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}
