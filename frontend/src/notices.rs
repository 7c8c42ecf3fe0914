//! Stack of notices shown above the upload form.
//!
//! Newest notices come first. There is no de-duplication and no maximum;
//! notices leave the board either when dismissed by the user or when their
//! timer expires, whichever happens first.

use crate::types::{Notice, Severity};

#[derive(Clone, Debug, Default)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a notice at the top and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.insert(
            0,
            Notice {
                id,
                message: message.into(),
                severity,
            },
        );
        id
    }

    /// Remove a notice. Unknown or already removed ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> Option<Notice> {
        let position = self.notices.iter().position(|n| n.id == id)?;
        Some(self.notices.remove(position))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.notices.iter().any(|n| n.id == id)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
