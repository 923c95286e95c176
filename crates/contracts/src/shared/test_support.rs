//! Helpers shared by the unit tests of this crate.

use crate::shared::popup::EscapeListener;

/// Escape listener that only counts subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountingListener {
    pub attached: usize,
    pub detached: usize,
}

impl CountingListener {
    /// Number of subscriptions currently alive
    pub fn active(&self) -> usize {
        self.attached - self.detached
    }
}

impl EscapeListener for CountingListener {
    fn attach(&mut self) {
        self.attached += 1;
    }

    fn detach(&mut self) {
        self.detached += 1;
    }
}
