// Use 3rd party
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;

// Use internal modules
use crate::auth::{request_token, AccessToken, SpotifyCredentials};
use crate::config::ClientConfig;
use crate::model::search::SearchQuery;
use crate::model::ResourceType;

pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_SEARCH_TYPE: &str = "artist";
pub const DEFAULT_MARKET: &str = "GB";

// A call refreshes the token at most this many times before giving up.
const MAX_TOKEN_REFRESHES: usize = 1;

// Possible errors returned from `rsbpm` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client_id and client_secret required")]
    MissingCredentials,
    #[error("authentication failed, ensure client credentials are correct (status: {0})")]
    Authentication(StatusCode),
    #[error("token lifetime of {0}s is out of range")]
    InvalidExpiry(u64),
    #[error("access token expired right after being refreshed")]
    TokenExpired,
    #[error("a query is required")]
    MissingQuery,
    #[error("no data found, check track_id: {0}")]
    NoData(String),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("url encode error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Error object Spotify returns with non-2xx responses.
#[derive(Debug, Error, Deserialize)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// The value handed back when a resource or search request is not successful.
pub fn empty_result() -> Value {
    Value::Object(Map::new())
}

// Spotify API
pub struct Spotify {
    client: Client,
    config: ClientConfig,
    credentials: SpotifyCredentials,
    token: Mutex<Option<AccessToken>>,
}

impl Spotify {
    /// Authenticates against the public Spotify endpoints.
    pub async fn new(credentials: SpotifyCredentials) -> ClientResult<Self> {
        Self::with_config(credentials, ClientConfig::default()).await
    }

    /// Authenticates right away; there is no unauthenticated client.
    pub async fn with_config(credentials: SpotifyCredentials, config: ClientConfig) -> ClientResult<Self> {
        credentials.validate()?;
        let client = Client::new();
        let token = request_token(&client, &config.token_url, &credentials).await?;

        Ok(Self {
            client,
            config,
            credentials,
            token: Mutex::new(Some(token)),
        })
    }

    /// Requests a new token and replaces the cached one.
    pub async fn authenticate(&self) -> ClientResult<()> {
        let token = request_token(&self.client, &self.config.token_url, &self.credentials).await?;
        *self.token.lock().await = Some(token);
        Ok(())
    }

    // The lock is held across the refresh so concurrent callers wait for a
    // single token request instead of racing each other.
    pub(crate) async fn access_token(&self) -> ClientResult<String> {
        let mut cached = self.token.lock().await;
        let mut refreshes = 0;
        loop {
            if let Some(token) = cached.as_ref().filter(|token| !token.is_expired()) {
                return Ok(token.token().to_owned());
            }
            if refreshes == MAX_TOKEN_REFRESHES {
                return Err(ClientError::TokenExpired);
            }
            debug!("access token missing or expired, re-authenticating");
            *cached = Some(request_token(&self.client, &self.config.token_url, &self.credentials).await?);
            refreshes += 1;
        }
    }

    // `None` for any non-2xx response.
    async fn api_call(&self, url: &str) -> ClientResult<Option<Value>> {
        let token = self.access_token().await?;
        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Self::convert_result::<Value>(&body).map(Some)
        } else {
            match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api_error) => warn!("request to {} failed: {}", url, api_error.error),
                Err(_) => warn!("request to {} failed with status {}", url, status),
            }
            Ok(None)
        }
    }

    /// Fetches `<base>/<version>/<resource_type>/<lookup_id>` and returns the
    /// decoded body untouched, or an empty object if the request is not successful.
    pub async fn get_resource(&self, lookup_id: &str, resource_type: ResourceType, version: &str) -> ClientResult<Value> {
        let url = self.config.resource_url(version, resource_type.as_str(), lookup_id);
        let result = self.api_call(&url).await?;
        Ok(result.unwrap_or_else(empty_result))
    }

    /// Searches the catalog. Every query field is sent as `"<field>:<value> "`.
    ///
    /// Returns the decoded body untouched, or an empty object if the request is
    /// not successful. An empty query is rejected before any request is made.
    pub async fn search(&self, query: &SearchQuery, search_type: &str, market_type: &str) -> ClientResult<Value> {
        if query.is_empty() {
            return Err(ClientError::MissingQuery);
        }

        let query_string = query.to_query_string();
        let search_type = search_type.to_lowercase();
        let params = serde_urlencoded::to_string(&[
            ("q", query_string.as_str()),
            ("type", search_type.as_str()),
            ("market", market_type),
        ])?;
        let url = self.config.search_url(&params);
        debug!("search url: {}", url);

        let result = self.api_call(&url).await?;
        Ok(result.unwrap_or_else(empty_result))
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }

    pub(crate) fn convert_value<T: DeserializeOwned>(input: Value) -> ClientResult<T> {
        serde_json::from_value::<T>(input).map_err(Into::into)
    }

    #[cfg(test)]
    pub(crate) async fn expire_token(&self) {
        if let Some(token) = self.token.lock().await.as_mut() {
            token.expire();
        }
    }
}
