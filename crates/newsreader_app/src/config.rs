//! Startup configuration for the session shell.

use client_logging::client_warn;
use newsreader_client::SearchSettings;

const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Build client settings from the environment.
///
/// A missing key is a warning, not a startup failure; requests will simply
/// be rejected upstream.
pub(crate) fn search_settings_from_env() -> SearchSettings {
    let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
    if api_key.is_empty() {
        client_warn!("{} is not set; search requests will fail upstream", API_KEY_VAR);
    }
    SearchSettings {
        api_key,
        ..SearchSettings::default()
    }
}
