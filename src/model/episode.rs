// Use 3rd party
use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, DefaultOnNull, OneOrMany};

// Use local
use crate::model::common::{ExternalUrls, Image, Restriction};
use crate::model::show::SimplifiedShow;
use crate::model::{ReleaseDatePrecision, SpotifyType};

#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumePoint {
    pub fully_played: bool,
    pub resume_position_ms: u64,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedEpisode {
    #[serde(default)]
    pub audio_preview_url: Option<String>,
    /// Plain text, see `html_description` for the markup version.
    pub description: String,
    pub duration_ms: u64,
    pub explicit: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: String,
    #[serde(default)]
    pub html_description: String,
    pub id: String,
    pub images: Vec<Image>,
    pub is_externally_hosted: bool,
    pub is_playable: bool,
    /// Deprecated by the API in favour of `languages`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub name: String,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    #[serde_as(as = "DefaultOnNull<OneOrMany<_, PreferMany>>")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<Restriction>,
    /// Only with the `user-read-playback-position` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_point: Option<ResumePoint>,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(flatten)]
    pub base: SimplifiedEpisode,
    pub show: SimplifiedShow,
}

impl From<Episode> for SimplifiedEpisode {
    fn from(episode: Episode) -> Self {
        episode.base
    }
}

/// Body of the several-episodes endpoint, `None` for unknown ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episodes {
    pub episodes: Vec<Option<Episode>>,
}
