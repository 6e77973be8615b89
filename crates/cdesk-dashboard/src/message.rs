//! Messages fed into [`Dashboard::update`](crate::Dashboard::update).
//!
//! Background tasks never touch state. They send one of these and the event
//! loop applies it.

use cdesk_paging::{LoadError, LoadPayload, SectionKind};

use crate::notice::NoticeId;

/// Session counter. Messages from an older session are dropped.
pub type Generation = u64;

#[derive(Debug)]
pub enum Message {
    /// A section's real load finished.
    Loaded {
        section: SectionKind,
        generation: Generation,
        result: Result<LoadPayload, LoadError>,
    },

    /// The fallback delay elapsed for a section.
    AutoInitialize {
        section: SectionKind,
        generation: Generation,
    },

    /// A section's refresh interval ticked.
    Refresh {
        section: SectionKind,
        generation: Generation,
    },

    /// A notice's display time is over.
    DismissNotice {
        id: NoticeId,
        generation: Generation,
    },
}

impl Message {
    pub fn generation(&self) -> Generation {
        match self {
            Self::Loaded { generation, .. }
            | Self::AutoInitialize { generation, .. }
            | Self::Refresh { generation, .. }
            | Self::DismissNotice { generation, .. } => *generation,
        }
    }
}
