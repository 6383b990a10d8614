// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::album::SimplifiedAlbum;
use crate::model::common::Image;
use crate::model::page::Paging;
use crate::model::playlist::SimplifiedPlaylist;
use crate::model::track::SimplifiedTrack;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub href: String,
    pub icons: Vec<Image>,
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    pub categories: Paging<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPlaylists {
    pub playlists: Paging<SimplifiedPlaylist>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPlaylists {
    pub message: String,
    pub playlists: Paging<SimplifiedPlaylist>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReleases {
    pub albums: Paging<SimplifiedAlbum>,
}

open_enum! {
    pub enum RecommendationSeedType {
        Artist => "artist" | "ARTIST",
        Track => "track" | "TRACK",
        Genre => "genre" | "GENRE",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSeed {
    /// Tracks left after the `min_*` and `max_*` filters.
    pub after_filtering_size: u32,
    /// Tracks left after relinking for regional availability.
    pub after_relinking_size: u32,
    /// `None` for genre seeds.
    #[serde(default)]
    pub href: Option<String>,
    /// Same string as passed in the `seed_*` parameter.
    pub id: String,
    pub initial_pool_size: u32,
    #[serde(rename = "type")]
    pub _type: RecommendationSeedType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub seeds: Vec<RecommendationSeed>,
    pub tracks: Vec<SimplifiedTrack>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailableGenreSeeds {
    pub genres: Vec<String>,
}
