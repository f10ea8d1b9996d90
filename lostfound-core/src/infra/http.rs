use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid base url: {0}")]
    Parse(#[from] url::ParseError),

    #[error("base url cannot carry path segments: {0}")]
    NotABase(String),
}

/// Shared HTTP client for the backend adapters.
///
/// `timeout` of `None` leaves requests unbounded.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Parse a service base url. A trailing slash is tolerated.
pub fn parse_base_url(raw: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(EndpointError::NotABase(raw.to_string()));
    }
    Ok(url)
}

/// Append `segments` to `base`, each percent-encoded as one segment.
pub(crate) fn join_segments<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
