pub mod albums;
pub mod artists;
pub mod audio_features;
pub mod search;
pub mod tracks;

use crate::client::Spotify;
use crate::endpoints::albums::*;
use crate::endpoints::artists::*;
use crate::endpoints::audio_features::*;
use crate::endpoints::search::*;
use crate::endpoints::tracks::*;

// Endpoint function namespaces

impl Spotify {
    pub const fn albums(&self) -> Albums {
        Albums(self)
    }

    pub const fn artists(&self) -> Artists {
        Artists(self)
    }

    pub const fn audio_features(&self) -> Features {
        Features(self)
    }

    pub const fn searches(&self) -> Search {
        Search(self)
    }

    pub const fn tracks(&self) -> Tracks {
        Tracks(self)
    }
}
