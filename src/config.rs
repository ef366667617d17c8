//! Configuration for the sample service client

use std::time::Duration;

/// Client configuration.
///
/// Owned by the client that is built from it and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix every endpoint is joined onto, e.g. `https://sample-service.com/api/`.
    /// Not validated here; a malformed value fails when a request is dispatched.
    pub base_url: String,
    pub user_agent: Option<String>,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Default configuration pointed at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: String::new(),
            user_agent: Some(format!("sample-service-client/{}", crate::VERSION)),
            timeout: None,
            connect_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;

    #[test]
    fn new_keeps_base_url_and_defaults() {
        let config = ClientConfig::new("https://sample-service.com/api/");
        assert_eq!(config.base_url, "https://sample-service.com/api/");
        assert!(config.timeout.is_none());
        assert!(config.connect_timeout.is_none());
        let agent = config.user_agent.expect("default user agent");
        assert!(agent.starts_with("sample-service-client/"));
    }
}
