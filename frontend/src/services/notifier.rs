//! Reactive notice board with timed auto-dismiss.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::notices::NoticeBoard;
use crate::types::{Notice, Severity};

/// Shows notices and removes them after a delay.
///
/// Each notice owns a [`Timeout`]. Dismissing a notice by hand cancels it;
/// a timer firing for a notice that is already gone does nothing.
#[derive(Clone, Copy)]
pub struct Notifier {
    board: RwSignal<NoticeBoard>,
    timers: StoredValue<HashMap<u64, Timeout>>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            board: create_rw_signal(NoticeBoard::new()),
            timers: store_value(HashMap::new()),
            timeout_ms,
        }
    }

    /// Current notices, newest first. Tracked.
    pub fn notices(&self) -> Vec<Notice> {
        self.board.with(|board| board.notices().to_vec())
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        match severity {
            Severity::Warning => log::warn!("⚠️ {}", message),
            Severity::Info => log::info!("ℹ️ {}", message),
        }

        let Some(id) = self.board.try_update(|board| board.push(message, severity)) else {
            return;
        };

        let board = self.board;
        let timeout = Timeout::new(self.timeout_ms, move || {
            board.try_update(|board| {
                board.dismiss(id);
            });
        });

        // Drop timers that already fired; never done from inside a callback.
        self.timers.update_value(|timers| {
            board.with_untracked(|live| timers.retain(|id, _| live.contains(*id)));
            timers.insert(id, timeout);
        });
    }

    /// Remove a notice now and cancel its timer.
    pub fn dismiss(&self, id: u64) {
        self.board.update(|board| {
            board.dismiss(id);
        });
        self.timers.update_value(|timers| {
            if let Some(timeout) = timers.remove(&id) {
                timeout.cancel();
            }
        });
    }
}
