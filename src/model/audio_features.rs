// Use 3rd party
use serde::{Deserialize, Serialize};

use crate::model::key::key_convert;

/// Spotify reports tempo as a float, older fixtures carry it as a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tempo {
    Number(f64),
    Text(String),
}

impl Tempo {
    /// Whole beats per minute, truncated toward zero.
    pub fn to_bpm(&self) -> Option<i64> {
        match self {
            Self::Number(bpm) if bpm.is_finite() => Some(bpm.trunc() as i64),
            Self::Number(_) => None,
            Self::Text(bpm) => bpm.trim().parse::<i64>().ok(),
        }
    }
}

/// Response of `/v1/audio-features/<id>`.
#[derive(Debug, Deserialize)]
pub struct AudioFeatures {
    pub key: i64,
    pub mode: Option<i64>,
    pub tempo: Tempo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MusicalData {
    pub track_id: String,
    pub key: String,
    pub tempo: i64,
}

impl MusicalData {
    pub fn from_features(track_id: &str, features: &AudioFeatures) -> Option<Self> {
        Some(Self {
            track_id: track_id.to_owned(),
            key: key_convert(features.key, features.mode),
            tempo: features.tempo.to_bpm()?,
        })
    }
}
