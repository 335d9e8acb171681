//! 編集パネルの状態
//!
//! 開いている間だけ下書きとエラー集合を持つ。閉じると両方破棄する。

use crate::api::Mutation;
use crate::draft::VacancyDraft;
use crate::types::Vacancy;
use crate::validation::{self, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPanel {
    draft: Option<VacancyDraft>,
    errors: ValidationErrors,
    /// 一度でも保存を試みたか（以降は編集ごとに再検証）
    submitted: bool,
}

impl EditPanel {
    /// パネルを開く。既存の求人を渡すと編集、Noneなら新規作成
    pub fn open(&mut self, source: Option<&Vacancy>) {
        self.draft = Some(source.map(VacancyDraft::from_vacancy).unwrap_or_default());
        self.errors = ValidationErrors::default();
        self.submitted = false;
    }

    /// パネルを閉じて下書きとエラーを破棄
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&VacancyDraft> {
        self.draft.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// 下書きを編集。保存を試みた後なら検証し直す
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut VacancyDraft) -> R) -> Option<R> {
        let draft = self.draft.as_mut()?;
        let result = f(draft);
        if self.submitted {
            self.errors = draft.validate();
        }
        Some(result)
    }

    /// 検証して送信内容を作る。エラーがあれば記録してNone
    pub fn submit(&mut self) -> Option<Mutation> {
        let draft = self.draft.as_ref()?;
        self.submitted = true;
        self.errors = draft.validate();
        if !self.errors.is_empty() {
            return None;
        }

        match draft.to_payload() {
            Ok(payload) => Some(Mutation::save(draft.id.clone(), payload)),
            Err(e) => {
                // 取り込んだ日付が解釈できない場合など
                self.errors.insert(validation::SHIFTS, e.to_string());
                None
            }
        }
    }
}
