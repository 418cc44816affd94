//! Newsreader client: paged search against the upstream news API.
mod handle;
mod search;
mod types;
mod wire;

pub use handle::SearchHandle;
pub use search::{ReqwestSearchClient, SearchClient, SearchSettings};
pub use types::{SearchError, SearchErrorKind, SearchEvent, SearchPage};
