// Use 3rd party
use serde::{Deserialize, Serialize};

use crate::model::audio_features::MusicalData;
use crate::model::{AlbumRef, ArtistRef, ExternalUrls};

/// Track object as returned by `/v1/tracks/<id>` and inside search results.
#[derive(Default, Debug, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub external_urls: ExternalUrls,
    pub album: AlbumRef,
}

impl TrackObject {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().and_then(|artist| artist.name.as_deref())
    }

    pub fn primary_image_url(&self) -> Option<&str> {
        self.album.images.first().and_then(|image| image.url.as_deref())
    }
}

#[derive(Default, Debug, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
}

#[derive(Default, Debug, Deserialize)]
pub struct TrackSearch {
    pub tracks: Paging<TrackObject>,
}

/// Flat search result row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub track_id: String,
    pub track_name: String,
    pub artist: String,
    pub track_url: String,
    pub image_url: String,
}

impl TrackSummary {
    /// `None` when the track has no id, no artist or no album image.
    pub fn from_object(track: &TrackObject) -> Option<Self> {
        Some(Self {
            track_id: track.id.clone()?,
            track_name: track.name.clone(),
            artist: track.primary_artist()?.to_owned(),
            track_url: track.external_urls.spotify.clone(),
            image_url: track.primary_image_url()?.to_owned(),
        })
    }
}

/// Track metadata merged with its key and tempo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub track_id: String,
    pub track_name: String,
    pub artist: String,
    pub track_url: String,
    pub image_url: String,
    pub key: String,
    pub tempo: i64,
}

impl Track {
    pub fn merge(track: &TrackObject, musical_data: MusicalData) -> Option<Self> {
        Some(Self {
            track_id: musical_data.track_id,
            track_name: track.name.clone(),
            artist: track.primary_artist()?.to_owned(),
            track_url: track.external_urls.spotify.clone(),
            image_url: track.primary_image_url()?.to_owned(),
            key: musical_data.key,
            tempo: musical_data.tempo,
        })
    }
}
