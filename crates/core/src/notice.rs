//! User-facing, non-fatal reports.
//!
//! Lookups that miss and writes that succeed are announced to the user rather than returned
//! as errors. The catalog hands each [`Notice`] to a [`NoticeSink`]; the binaries print them,
//! tests record them.

use crate::constants::{FILE_UPDATED_NOTICE, PHOTO_NOT_FOUND_NOTICE};
use catalog_types::RecordId;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PhotoNotFound { id: RecordId },
    FileUpdated { path: PathBuf },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PhotoNotFound { .. } => f.write_str(PHOTO_NOT_FOUND_NOTICE),
            Notice::FileUpdated { .. } => f.write_str(FILE_UPDATED_NOTICE),
        }
    }
}

/// Receiver for catalog notices.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Prints notices to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotices;

impl NoticeSink for ConsoleNotices {
    fn notify(&self, notice: Notice) {
        println!("{notice}");
    }
}

/// Keeps every notice in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordedNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordedNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notices seen so far.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the notices seen so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl NoticeSink for RecordedNotices {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
