//! Rsbpm is a small wrapper around the Spotify Web API for looking up the
//! tempo and key of tracks.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rsbpm = "0.1.0"
//! ```
//!
//! By default, Rsbpm uses asynchronous programming with `async` and `await`.
//!
//! ## Authorization
//!
//! Rsbpm uses the client credentials flow, so it only needs the client id and
//! client secret of an application registered in the Spotify developer dashboard.
//! The client authenticates as soon as it is created and keeps the access token
//! until it expires; the next request after that fetches a new one.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rsbpm = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use rsbpm::auth::SpotifyCredentials;
//! use rsbpm::client::Spotify;
//! use rsbpm::model::search::SearchQuery;
//! use dotenv::dotenv;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     // Reads CLIENT_ID and CLIENT_SECRET
//!     let credentials = SpotifyCredentials::from_env().unwrap();
//!     let spotify = Spotify::new(credentials).await.unwrap();
//!
//!     let query = SearchQuery::new().track("money").artist("pink floyd");
//!     for track in spotify.tracks().search(&query).await.unwrap() {
//!         let details = spotify.tracks().get(&track.track_id).await.unwrap();
//!         println!("{:?}", details);
//!     }
//! }
//! ```
//!
//! ## Known limitations
//!
//! Requests that fail upstream (any non-2xx status) come back as an empty
//! JSON object, so "not found" and "temporarily unavailable" look the same.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod model;
