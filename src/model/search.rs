// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::album::SimplifiedAlbum;
use crate::model::artist::Artist;
use crate::model::episode::SimplifiedEpisode;
use crate::model::page::Paging;
use crate::model::playlist::SimplifiedPlaylist;
use crate::model::show::SimplifiedShow;
use crate::model::track::Track;

/// Body of the search endpoint. Only the kinds that were asked for are set.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Paging<Track>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Paging<Artist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albums: Option<Paging<SimplifiedAlbum>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlists: Option<Paging<SimplifiedPlaylist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shows: Option<Paging<SimplifiedShow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Paging<SimplifiedEpisode>>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        fn empty<T>(page: &Option<Paging<T>>) -> bool {
            page.as_ref().map_or(true, |page| page.items.is_empty())
        }

        empty(&self.tracks)
            && empty(&self.artists)
            && empty(&self.albums)
            && empty(&self.playlists)
            && empty(&self.shows)
            && empty(&self.episodes)
    }
}
