//! デバウンス
//!
//! 入力のたびにタイマーを張り直し、最後の入力から一定時間経過したら1回だけ実行する。
//! 保留中のタイマーは常に高々1つ。タイマーの実体は [`Scheduler`] が提供し、
//! ハンドルをdropするとキャンセルされる（gloo の `Timeout` と同じ契約）。

/// 既定のデバウンス間隔（ミリ秒）
pub const DEBOUNCE_MS: u32 = 500;

/// 遅延実行の提供元
pub trait Scheduler {
    /// dropでキャンセルされるハンドル
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// 再スタート型デバウンサ
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// 保留中のタスクを破棄して新しいタスクを予約
    pub fn trigger(&mut self, task: impl FnOnce() + 'static) {
        // 先にdropして旧タイマーを止める
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// 保留中のタスクを破棄
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
