//! 一覧取得の順序制御
//!
//! 取得のたびに番号（チケット）を発行し、最後に発行した番号の結果だけを採用する。
//! 追い越した古いレスポンスが新しい一覧を上書きしないようにするため。

use std::cell::Cell;

/// 発行済みチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいチケットを発行（以前のチケットは無効になる）
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    /// 最新のチケットか
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest.get()
    }
}
