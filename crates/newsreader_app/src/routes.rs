//! Navigation paths shared between the feed and detail views.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use thiserror::Error;

const DETAIL_PREFIX: &str = "/news/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Feed,
    /// Detail view for the article with this (decoded) URL.
    Article { url: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RouteError {
    #[error("unknown path {0:?}")]
    UnknownPath(String),
    #[error("article identifier is not valid percent-encoded UTF-8")]
    MalformedIdentifier,
    #[error("article identifier is not a URL: {0:?}")]
    NotAUrl(String),
}

/// Parse a navigation path into a route.
///
/// The detail identifier is a percent-encoded article URL; it is decoded
/// and validated here so the lookup index can stay a dumb exact match.
pub(crate) fn parse_route(raw_path: &str) -> Result<Route, RouteError> {
    if raw_path == "/" {
        return Ok(Route::Feed);
    }
    let Some(encoded) = raw_path.strip_prefix(DETAIL_PREFIX) else {
        return Err(RouteError::UnknownPath(raw_path.to_string()));
    };
    if encoded.is_empty() {
        return Err(RouteError::UnknownPath(raw_path.to_string()));
    }
    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|_| RouteError::MalformedIdentifier)?;
    let url = decoded.into_owned();
    url::Url::parse(&url).map_err(|_| RouteError::NotAUrl(url.clone()))?;
    Ok(Route::Article { url })
}

/// Build the detail path for an article URL.
pub(crate) fn article_route(url: &str) -> String {
    format!(
        "{DETAIL_PREFIX}{}",
        utf8_percent_encode(url, NON_ALPHANUMERIC)
    )
}
