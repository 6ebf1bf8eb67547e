use std::fmt;

use crate::PageNumber;

/// Failures raised inside the browse state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowseError {
    /// A second fetch was started while one is still in flight.
    #[error("fetch for page {requested} refused: page {in_flight} is still loading")]
    AlreadyLoading {
        requested: PageNumber,
        in_flight: PageNumber,
    },
    /// A completion that no longer matches the session. Never shown to users.
    #[error("stale response discarded: {0}")]
    StaleResponse(StaleReason),
}

/// Why a completion failed the stale-response guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// The active filter differs from the one captured at dispatch.
    FilterChanged,
    /// Nothing is pending; the session was reset after dispatch.
    NotPending,
    /// A newer fetch replaced the one this completion belongs to.
    Superseded,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::FilterChanged => write!(f, "filter changed"),
            StaleReason::NotPending => write!(f, "no fetch pending"),
            StaleReason::Superseded => write!(f, "superseded by a newer fetch"),
        }
    }
}

/// User-visible fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus(u16),
    Timeout,
    InvalidResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}
