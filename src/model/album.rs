// Use 3rd party
use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, DefaultOnNull, OneOrMany};

// Use local
use crate::model::artist::ArtistEntry;
use crate::model::common::{Copyright, ExternalIds, ExternalUrls, Image, Restriction};
use crate::model::page::Listing;
use crate::model::track::SimplifiedTrack;
use crate::model::{ReleaseDatePrecision, SpotifyType};

open_enum! {
    pub enum AlbumType {
        Album => "album" | "ALBUM",
        Single => "single" | "SINGLE",
        Compilation => "compilation" | "COMPILATION",
    }
}

open_enum! {
    /// Relation of an album to the artist it was listed for.
    pub enum AlbumGroup {
        Album => "album",
        Single => "single",
        Compilation => "compilation",
        AppearsOn => "appears_on",
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    /// Only present when listing an artist's albums.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_group: Option<AlbumGroup>,
    pub album_type: AlbumType,
    /// Simplified records from the API, full ones are kept when sent.
    pub artists: Vec<ArtistEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_markets: Option<Vec<String>>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    pub images: Vec<Image>,
    pub name: String,
    /// For example "1981-12-15", or "1981" when only the year is known.
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    #[serde_as(as = "DefaultOnNull<OneOrMany<_, PreferMany>>")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<Restriction>,
    pub total_tracks: u32,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(flatten)]
    pub base: SimplifiedAlbum,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub genres: Vec<String>,
    pub label: String,
    pub popularity: u32,
    pub tracks: Listing<SimplifiedTrack>,
}

impl Album {
    pub fn is_restricted(&self) -> bool {
        !self.base.restrictions.is_empty()
    }
}

impl From<Album> for SimplifiedAlbum {
    fn from(album: Album) -> Self {
        album.base
    }
}

/// Body of the several-albums endpoint, `None` for unknown ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Albums {
    pub albums: Vec<Option<Album>>,
}
