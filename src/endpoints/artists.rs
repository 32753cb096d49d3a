//! Endpoint functions related to artists

use serde_json::Value;

use crate::client::{ClientResult, Spotify, DEFAULT_API_VERSION};
use crate::model::ResourceType;

pub struct Artists<'a>(pub &'a Spotify);

impl Artists<'_> {
    /// Raw artist object, empty when the artist can't be fetched.
    pub async fn get(&self, id: &str) -> ClientResult<Value> {
        self.0.get_resource(id, ResourceType::Artists, DEFAULT_API_VERSION).await
    }
}
