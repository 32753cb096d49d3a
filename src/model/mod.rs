pub mod audio_features;
pub mod key;
pub mod search;
pub mod track;

use serde::Deserialize;

use std::fmt;

/// Catalog resources addressable by `<version>/<resource_type>/<id>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceType {
    Tracks,
    Artists,
    Albums,
    AudioFeatures,
}

impl ResourceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tracks => "tracks",
            Self::Artists => "artists",
            Self::Albums => "albums",
            Self::AudioFeatures => "audio-features",
        }
    }
}

impl Default for ResourceType {
    fn default() -> Self {
        Self::Tracks
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Default, Debug, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

// Only the first artist and image are read, the rest may be incomplete.
#[derive(Default, Debug, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
pub struct ArtistRef {
    pub name: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
pub struct AlbumRef {
    pub images: Vec<Image>,
}
