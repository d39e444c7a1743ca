//! Network seam of the mirror
//!
//! Every request the mirror makes goes through [`Transport::fetch`]. There is
//! no retry and no timeout beyond the transport's default: a failed request
//! surfaces as [`Error::Transport`] with the underlying error as its source.

use tracing::debug;
use ucdb_core::{Error, Result};

/// Client identifier sent with every request
pub const USER_AGENT: &str = concat!(
    "ucdb/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/ucdb/ucdb)"
);

/// Blocking retrieval of remote resources
pub trait Transport: Send + Sync {
    /// Fetch the resource at `url`, optionally with an `Accept` header
    fn fetch(&self, url: &str, accept: Option<&str>) -> Result<Vec<u8>>;
}

// ============================================================================
// HTTP
// ============================================================================

/// Transport over HTTPS, built on `ureq`
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport with the default agent configuration
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder().build();
        HttpTransport {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str, accept: Option<&str>) -> Result<Vec<u8>> {
        debug!(target: "ucdb::mirror", url, "HTTP GET");

        let mut request = self.agent.get(url).header("User-Agent", USER_AGENT);
        if let Some(accept) = accept {
            request = request.header("Accept", accept);
        }

        let mut response = request.call().map_err(|e| Error::transport(url, e))?;
        response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Error::transport(url, e))
    }
}

// ============================================================================
// Offline
// ============================================================================

/// Transport that refuses every request
///
/// Useful for mirrors that must never touch the network, e.g. in CI with a
/// pre-populated mirror root.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn fetch(&self, url: &str, _accept: Option<&str>) -> Result<Vec<u8>> {
        Err(Error::transport(url, "network access is disabled"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("ucdb/"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_offline_transport_fails() {
        let err = OfflineTransport
            .fetch("https://www.unicode.org/Public/UCD/latest/ReadMe.txt", None)
            .unwrap_err();
        match err {
            Error::Transport { url, .. } => assert!(url.ends_with("ReadMe.txt")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
