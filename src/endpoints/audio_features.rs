//! Endpoint functions related to audio features

use serde_json::Value;

use crate::client::{ClientResult, Spotify, DEFAULT_API_VERSION};
use crate::model::ResourceType;

pub struct Features<'a>(pub &'a Spotify);

impl Features<'_> {
    /// Raw audio analysis summary (key, mode, tempo, ...) of a track.
    pub async fn get(&self, track_id: &str) -> ClientResult<Value> {
        self.0.get_resource(track_id, ResourceType::AudioFeatures, DEFAULT_API_VERSION).await
    }
}
