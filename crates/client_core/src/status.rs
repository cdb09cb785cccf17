//! Transient status line and its expiry timer.

use std::time::{Duration, Instant};

pub const SAVED_MESSAGE: &str = "Address saved successfully ✅";
pub const CLEARED_MESSAGE: &str = "Address cleared.";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save address.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Saved,
    Cleared,
    SaveFailed,
}

impl StatusKind {
    pub fn text(self) -> &'static str {
        match self {
            StatusKind::Saved => SAVED_MESSAGE,
            StatusKind::Cleared => CLEARED_MESSAGE,
            StatusKind::SaveFailed => SAVE_FAILED_MESSAGE,
        }
    }

    pub fn is_failure(self) -> bool {
        self == StatusKind::SaveFailed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTimings {
    pub saved: Duration,
    pub cleared: Duration,
}

impl Default for StatusTimings {
    fn default() -> Self {
        Self {
            saved: Duration::from_millis(3000),
            cleared: Duration::from_millis(2000),
        }
    }
}

impl StatusTimings {
    /// How long a status of `kind` stays up. `None` means until the next action.
    pub fn lifetime(&self, kind: StatusKind) -> Option<Duration> {
        match kind {
            StatusKind::Saved => Some(self.saved),
            StatusKind::Cleared => Some(self.cleared),
            StatusKind::SaveFailed => None,
        }
    }
}

/// Expiry deadline for one status message.
///
/// Owned by the status it belongs to; replacing or dropping the status
/// cancels the timer with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTimer {
    deadline: Instant,
}

impl StatusTimer {
    pub fn start(now: Instant, lifetime: Duration) -> Self {
        Self {
            deadline: now + lifetime,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    kind: StatusKind,
    timer: Option<StatusTimer>,
}

impl StatusMessage {
    pub(crate) fn new(kind: StatusKind, now: Instant, timings: &StatusTimings) -> Self {
        Self {
            kind,
            timer: timings
                .lifetime(kind)
                .map(|lifetime| StatusTimer::start(now, lifetime)),
        }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn text(&self) -> &'static str {
        self.kind.text()
    }

    pub fn timer(&self) -> Option<&StatusTimer> {
        self.timer.as_ref()
    }
}
