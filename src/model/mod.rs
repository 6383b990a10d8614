pub mod album;
pub mod artist;
pub mod audio;
pub mod browse;
pub mod common;
pub mod compat;
pub mod episode;
pub mod page;
pub mod playable;
pub mod player;
pub mod playlist;
pub mod query;
pub mod saved;
pub mod search;
pub mod show;
pub mod track;
pub mod user;

open_enum! {
    /// The kind of a catalog object, as carried in its `type` field.
    pub enum SpotifyType {
        Album => "album",
        Artist => "artist",
        Episode => "episode",
        Playlist => "playlist",
        Show => "show",
        Track => "track",
        User => "user",
    }
}

open_enum! {
    /// How precisely a `release_date` is known.
    pub enum ReleaseDatePrecision {
        Year => "year",
        Month => "month",
        Day => "day",
    }
}
