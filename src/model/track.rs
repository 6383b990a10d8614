// Use 3rd party
use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, DefaultOnNull, OneOrMany};

// Use local
use crate::model::album::SimplifiedAlbum;
use crate::model::artist::ArtistEntry;
use crate::model::common::{ExternalIds, ExternalUrls, Restriction};
use crate::model::SpotifyType;

/// The original track a relinked track stands in for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkedTrack {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedTrack {
    /// Simplified records from the API, full ones are kept when sent.
    pub artists: Vec<ArtistEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_markets: Option<Vec<String>>,
    pub disc_number: u32,
    pub duration_ms: u64,
    /// `false` also when it is unknown.
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    #[serde(default)]
    pub is_local: bool,
    /// Only set when track relinking applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_playable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_from: Option<LinkedTrack>,
    pub name: String,
    /// 30 second MP3 preview.
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde_as(as = "DefaultOnNull<OneOrMany<_, PreferMany>>")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<Restriction>,
    pub track_number: u32,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

impl SimplifiedTrack {
    /// Missing relinking data means the track is playable.
    pub fn is_playable(&self) -> bool {
        self.is_playable.unwrap_or(true) && self.restrictions.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(flatten)]
    pub base: SimplifiedTrack,
    pub album: SimplifiedAlbum,
    #[serde(default)]
    pub external_ids: ExternalIds,
    pub popularity: u32,
}

impl From<Track> for SimplifiedTrack {
    fn from(track: Track) -> Self {
        track.base
    }
}

/// Body of the several-tracks endpoint, `None` for unknown ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tracks {
    pub tracks: Vec<Option<Track>>,
}
