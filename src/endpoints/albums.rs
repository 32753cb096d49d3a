//! Endpoint functions related to albums

use serde_json::Value;

use crate::client::{ClientResult, Spotify, DEFAULT_API_VERSION};
use crate::model::ResourceType;

pub struct Albums<'a>(pub &'a Spotify);

impl Albums<'_> {
    pub async fn get(&self, id: &str) -> ClientResult<Value> {
        self.0.get_resource(id, ResourceType::Albums, DEFAULT_API_VERSION).await
    }
}
