//! Endpoint functions related to search

use serde_json::Value;

use crate::client::*;
use crate::model::search::SearchQuery;

pub struct Search<'a>(pub &'a Spotify);

impl Search<'_> {
    /// Searches with `artist` as type and `GB` as market unless told otherwise.
    pub async fn find(&self, query: &SearchQuery, search_type: Option<&str>, market_type: Option<&str>) -> ClientResult<Value> {
        let search_type = search_type.unwrap_or(DEFAULT_SEARCH_TYPE);
        let market_type = market_type.unwrap_or(DEFAULT_MARKET);
        self.0.search(query, search_type, market_type).await
    }
}
