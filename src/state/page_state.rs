/// Page state definitions for tracking crawl progress
///
/// Every URL the frontier dequeues moves `Pending -> Fetching -> Done | Failed`.
use std::fmt;

/// Represents the current state of a URL in one team's crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Known and queued, not yet fetched
    Pending,

    /// Request in flight
    Fetching,

    /// Fetched, extracted and link-scanned
    Done,

    /// Fetch failed (transport error, non-success status or timeout)
    Failed,
}

impl PageState {
    /// Returns true if this is a terminal state (never fetched again)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: PageState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetching)
                | (Self::Fetching, Self::Done)
                | (Self::Fetching, Self::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
