use std::fmt;

use newsreader_core::{Article, Generation};

/// One normalized page from the search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub articles: Vec<Article>,
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    pub kind: SearchErrorKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: SearchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The string shown in the error banner.
    ///
    /// Upstream-supplied messages pass through untouched; transport noise
    /// collapses to one generic line, with the detail left to the log.
    pub fn user_message(&self) -> String {
        match self.kind {
            SearchErrorKind::Network | SearchErrorKind::Timeout => {
                "failed to fetch news".to_string()
            }
            SearchErrorKind::InvalidUrl
            | SearchErrorKind::HttpStatus(_)
            | SearchErrorKind::Decode => self.message.clone(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchErrorKind::InvalidUrl => write!(f, "invalid url"),
            SearchErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            SearchErrorKind::Timeout => write!(f, "timeout"),
            SearchErrorKind::Network => write!(f, "network error"),
            SearchErrorKind::Decode => write!(f, "malformed response"),
        }
    }
}

/// Completion notice emitted by the background search handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    PageCompleted {
        generation: Generation,
        page: u32,
        result: Result<SearchPage, SearchError>,
    },
}
