use crate::{Generation, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one page request against the search API.
    ///
    /// The generation identifies which filter session the request belongs
    /// to; the completion message must carry it back unchanged.
    FetchPage {
        generation: Generation,
        request: PageRequest,
    },
}
