// Use 3rd party
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

// Use built-in library
use std::env;
use std::fmt;
use std::time::{Duration, Instant};

// Use internal modules
use crate::client::{ClientError, ClientResult};

/// Client id and secret of a Spotify application.
#[derive(Clone, PartialEq)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl SpotifyCredentials {
    #[must_use]
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
        }
    }

    /// Reads `CLIENT_ID` and `CLIENT_SECRET` from the environment.
    pub fn from_env() -> ClientResult<Self> {
        let client_id = env::var("CLIENT_ID").map_err(|_| ClientError::MissingCredentials)?;
        let client_secret = env::var("CLIENT_SECRET").map_err(|_| ClientError::MissingCredentials)?;
        let credentials = Self::new(&client_id, &client_secret);
        credentials.validate()?;
        Ok(credentials)
    }

    pub(crate) fn validate(&self) -> ClientResult<()> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(ClientError::MissingCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

//Token response example:
//{
    //"access_token": "NgCXRKc...MzYjw",
    //"token_type": "bearer",
    //"expires_in": 3600
//}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// A bearer token together with the instant it stops being valid.
#[derive(Clone)]
pub struct AccessToken {
    token: String,
    expires_at: Instant,
}

impl AccessToken {
    /// `None` when `expires_in` reaches past what an `Instant` can hold.
    pub fn new(token: &str, expires_in: Duration) -> Option<Self> {
        Some(Self {
            token: token.to_owned(),
            expires_at: Instant::now().checked_add(expires_in)?,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// A token is only usable while it is non-empty and strictly before its expiry.
    pub fn is_expired(&self) -> bool {
        self.token.is_empty() || Instant::now() >= self.expires_at
    }

    #[cfg(test)]
    pub(crate) fn expire(&mut self) {
        self.expires_at = Instant::now();
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Runs the client credentials grant against `token_url`.
pub(crate) async fn request_token(
    client: &Client,
    token_url: &str,
    credentials: &SpotifyCredentials,
) -> ClientResult<AccessToken> {
    credentials.validate()?;

    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        error!(
            "Authentication failed for client {:?}, status: {}",
            credentials.client_id, status
        );
        return Err(ClientError::Authentication(status));
    }

    let body = response.text().await?;
    let token_response: TokenResponse = serde_json::from_str(&body)?;
    debug!("access token obtained, expires in {}s", token_response.expires_in);

    AccessToken::new(
        &token_response.access_token,
        Duration::from_secs(token_response.expires_in),
    )
    .ok_or(ClientError::InvalidExpiry(token_response.expires_in))
}
