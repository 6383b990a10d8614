// Use 3rd party
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

// Use built-in library
use std::convert::TryFrom;

// Use local
use crate::model::common::{ExternalUrls, Followers, Image};
use crate::model::page::Listing;
use crate::model::playable::PlayableItem;
use crate::model::user::PublicUser;
use crate::model::SpotifyType;

/// Where to fetch the tracks of a playlist and how many there are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTracksReference {
    pub href: String,
    pub total: u32,
}

/// One slot of a playlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// `None` for very old playlists.
    pub added_at: Option<String>,
    pub added_by: Option<PublicUser>,
    pub is_local: bool,
    /// `None` when the item is no longer available.
    pub track: Option<PlayableItem>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    pub collaborative: bool,
    /// Only set for modified, verified playlists.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    pub id: String,
    /// Up to three images, possibly none.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    /// Version of the playlist, usable to target it in later requests.
    pub snapshot_id: String,
    pub tracks: PlaylistTracksReference,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub collaborative: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub followers: Followers,
    pub href: String,
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub images: Vec<Image>,
    pub name: String,
    pub owner: PublicUser,
    /// `None` when the public/private status is not relevant.
    pub public: Option<bool>,
    pub snapshot_id: String,
    /// Slots may hold no track when it became unavailable.
    pub tracks: Listing<PlaylistTrack>,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

impl Playlist {
    /// Items that are still available, in playlist order.
    pub fn items(&self) -> impl Iterator<Item = &PlayableItem> {
        self.tracks.items().iter().filter_map(|slot| slot.track.as_ref())
    }
}

impl From<Playlist> for SimplifiedPlaylist {
    fn from(playlist: Playlist) -> Self {
        let tracks = match &playlist.tracks {
            Listing::Paged(page) => PlaylistTracksReference {
                href: page.href.clone(),
                total: page.total,
            },
            Listing::Plain(items) => PlaylistTracksReference {
                href: format!("{}/tracks", playlist.href),
                total: u32::try_from(items.len()).unwrap_or(u32::MAX),
            },
        };

        Self {
            collaborative: playlist.collaborative,
            description: playlist.description,
            external_urls: playlist.external_urls,
            href: playlist.href,
            id: playlist.id,
            images: playlist.images,
            name: playlist.name,
            owner: playlist.owner,
            snapshot_id: playlist.snapshot_id,
            tracks,
            _type: playlist._type,
            uri: playlist.uri,
        }
    }
}
