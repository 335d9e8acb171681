//! gloo の Timeout を使ったスケジューラ

use gloo::timers::callback::Timeout;
use vacancy_common::Scheduler;

/// ブラウザの setTimeout（Timeoutはdropでキャンセル）
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
