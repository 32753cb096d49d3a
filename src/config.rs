// Use 3rd party
use serde::{Deserialize, Serialize};

pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com";

/// Where the client sends its requests.
///
/// `token_url` receives the client credentials grant, every resource and
/// search call is built on top of `api_base_url`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub token_url: String,
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token_url: SPOTIFY_TOKEN_URL.to_owned(),
            api_base_url: SPOTIFY_API_BASE_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Serve both the token endpoint and the API from a single host,
    /// e.g. a local mock server or a proxy.
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            token_url: format!("{}/api/token", base_url),
            api_base_url: base_url.to_owned(),
        }
    }

    pub(crate) fn resource_url(&self, version: &str, resource_type: &str, lookup_id: &str) -> String {
        format!("{}/{}/{}/{}", self.api_base_url, version, resource_type, lookup_id)
    }

    pub(crate) fn search_url(&self, encoded_params: &str) -> String {
        format!("{}/v1/search?{}", self.api_base_url, encoded_params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_to_spotify() {
        let config = ClientConfig::default();
        assert_eq!(config.token_url, "https://accounts.spotify.com/api/token");
        assert_eq!(config.api_base_url, "https://api.spotify.com");
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.token_url, "http://127.0.0.1:1234/api/token");
        assert_eq!(config.api_base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn test_resource_url() {
        let config = ClientConfig::default();
        assert_eq!(
            config.resource_url("v1", "audio-features", "abc123"),
            "https://api.spotify.com/v1/audio-features/abc123"
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"token_url": "http://localhost/token", "api_base_url": "http://localhost"}"#,
        )
        .unwrap();
        assert_eq!(config.token_url, "http://localhost/token");
        assert_eq!(config.search_url("q=x"), "http://localhost/v1/search?q=x");
    }
}
