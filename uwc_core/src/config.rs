//! Environment-backed configuration.

use std::env;

static UPRN_VAR: &str = "UPRN";
static BASE_URL_VAR: &str = "WASTE_API_BASE_URL";
static DEFAULT_BASE_URL: &str = "https://api.westnorthants.digital/openapi/v1";

/// Runtime configuration for the collection client.
///
/// A missing UPRN is not a startup error; the fetch reports it as a failure
/// so the server can answer requests with a proper status instead of crashing.
#[derive(Debug, Clone)]
pub struct Config {
    /// The property reference number to query the upstream API with.
    pub uprn: Option<String>,
    /// Base URL of the upstream API, overridable for tests.
    pub base_url: String,
}

impl Config {
    /// Read the configuration from the `UPRN` and `WASTE_API_BASE_URL`
    /// environment variables.
    pub fn from_env() -> Self {
        let uprn = env::var(UPRN_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty());
        let base_url = env::var(BASE_URL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        Self { uprn, base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uprn: None,
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}
