//! Transient notices raised when a section falls back to sample data.
//!
//! Notices auto-dismiss after a timeout scheduled by the dashboard.

use std::fmt;

use cdesk_paging::SectionKind;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identifier handed to the dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NoticeId(u64);

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice-{}", self.0)
    }
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    /// Section the notice concerns, if any.
    pub section: Option<SectionKind>,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Ordered collection of visible notices.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a notice and return its id.
    pub fn push(
        &mut self,
        level: NoticeLevel,
        section: Option<SectionKind>,
        message: impl Into<String>,
    ) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.notices.push(Notice {
            id,
            level,
            section,
            message: message.into(),
            raised_at: Utc::now(),
        });
        id
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    /// Visible notices, oldest first.
    pub fn list(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}
