// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::common::{ExternalUrls, Followers, Image};
use crate::model::track::Track;
use crate::model::SpotifyType;

/// Artist as it appears nested in albums and tracks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(flatten)]
    pub base: SimplifiedArtist,
    pub followers: Followers,
    /// Empty when the artist is not classified yet.
    pub genres: Vec<String>,
    /// Widest first.
    pub images: Vec<Image>,
    /// Between 0 and 100, computed from the popularity of the artist's tracks.
    pub popularity: u32,
}

impl From<Artist> for SimplifiedArtist {
    fn from(artist: Artist) -> Self {
        artist.base
    }
}

/// Artist credited on an album or a track.
///
/// The API usually nests simplified artists there, but a full record is
/// kept whole when one shows up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtistEntry {
    Full(Artist),
    Simplified(SimplifiedArtist),
}

impl ArtistEntry {
    pub fn simplified(&self) -> &SimplifiedArtist {
        match self {
            Self::Full(artist) => &artist.base,
            Self::Simplified(artist) => artist,
        }
    }

    pub fn full(&self) -> Option<&Artist> {
        match self {
            Self::Full(artist) => Some(artist),
            Self::Simplified(_) => None,
        }
    }
}

impl From<ArtistEntry> for SimplifiedArtist {
    fn from(entry: ArtistEntry) -> Self {
        match entry {
            ArtistEntry::Full(artist) => artist.base,
            ArtistEntry::Simplified(artist) => artist,
        }
    }
}

/// Body of the several-artists and related-artists endpoints, `None` for
/// unknown ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artists {
    pub artists: Vec<Option<Artist>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtistTopTracks {
    pub tracks: Vec<Track>,
}
