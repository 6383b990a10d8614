// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::common::{Copyright, ExternalUrls, Image};
use crate::model::episode::SimplifiedEpisode;
use crate::model::page::Listing;
use crate::model::SpotifyType;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedShow {
    /// ISO 3166-1 alpha-2 country codes.
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    pub description: String,
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    #[serde(default)]
    pub html_description: String,
    pub id: String,
    pub images: Vec<Image>,
    /// Can be `null` for some shows.
    #[serde(default)]
    pub is_externally_hosted: Option<bool>,
    pub languages: Vec<String>,
    pub media_type: String,
    pub name: String,
    pub publisher: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_episodes: Option<u32>,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(flatten)]
    pub base: SimplifiedShow,
    pub episodes: Listing<SimplifiedEpisode>,
}

impl From<Show> for SimplifiedShow {
    fn from(show: Show) -> Self {
        show.base
    }
}

/// Body of the several-shows endpoint, `None` for unknown ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shows {
    pub shows: Vec<Option<SimplifiedShow>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::saved::SavedShow;
    use crate::model::tests::fixture;
    use serde_json::json;

    #[test]
    fn show() {
        let show: Show = serde_json::from_str(&fixture("show.json")).unwrap();
        assert_eq!(show.base.id, "5CfCWKI5pZ28U0uOzXkDHe");
        assert_eq!(show.base.publisher, "Spotify");
        assert_eq!(show.base.is_externally_hosted, Some(false));
        assert!(show.episodes.is_paged());
        assert_eq!(show.episodes.items()[0].name, "Spotify Developers Podcast: Episode 1");
    }

    #[test]
    fn saved_show() {
        let show: serde_json::Value = serde_json::from_str(&fixture("show.json")).unwrap();
        let saved: SavedShow = serde_json::from_value(json!({
            "added_at": "2021-01-01T10:00:00Z",
            "show": show
        }))
        .unwrap();
        assert_eq!(saved.added_at, "2021-01-01T10:00:00Z");
        assert_eq!(saved.item.base.name, "Spotify Developers Podcast");
    }

    #[test]
    fn several_shows_with_unknown_id() {
        let show: serde_json::Value = serde_json::from_str(&fixture("show.json")).unwrap();
        let shows: Shows = serde_json::from_value(json!({ "shows": [null, show] })).unwrap();
        assert!(shows.shows[0].is_none());
        assert_eq!(shows.shows[1].as_ref().unwrap().publisher, "Spotify");
    }
}
