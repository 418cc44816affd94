//! Newsreader core: pure pagination state machine and article lookup.
mod article;
mod effect;
mod filter;
mod index;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::Article;
pub use effect::Effect;
pub use filter::{
    Category, Filter, PageRequest, UnknownCategory, DEFAULT_COUNTRY, DEFAULT_PAGE_SIZE,
};
pub use index::ArticleIndex;
pub use msg::Msg;
pub use state::{FeedPhase, FeedState, Generation};
pub use update::update;
pub use view_model::{dedupe_by_url, FeedView};
