/// Page outcome definitions for crawl reporting
///
/// Every URL the crawler marks visited ends in exactly one of these states.
use std::fmt;

/// Represents the terminal outcome of a visited page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Success =====
    /// Page was fetched, its text extracted and stored in the index
    Indexed,

    // ===== HTTP Errors =====
    /// Page returned HTTP 404 or 410
    DeadLink,

    /// Page returned any other non-2xx status
    HttpError,

    // ===== Transport Errors =====
    /// Page could not be reached (connection refused, DNS failure, timeout)
    Unreachable,

    /// Page fetch failed for other transport reasons (body read, TLS, etc.)
    Failed,

    // ===== Content Errors =====
    /// Page body could not be parsed into text and links
    ParseFailed,
}

impl PageState {
    /// Returns true if the page made it into the content index
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Indexed)
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns true if the failure came from the transport layer
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::DeadLink | Self::HttpError | Self::Unreachable | Self::Failed
        )
    }

    /// Short machine-readable name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indexed => "indexed",
            Self::DeadLink => "dead_link",
            Self::HttpError => "http_error",
            Self::Unreachable => "unreachable",
            Self::Failed => "failed",
            Self::ParseFailed => "parse_failed",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Indexed,
            Self::DeadLink,
            Self::HttpError,
            Self::Unreachable,
            Self::Failed,
            Self::ParseFailed,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
