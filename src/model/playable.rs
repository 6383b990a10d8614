//! Items that can sit in a playlist, a queue or the player.

// Use 3rd party
use log::debug;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Use local
use crate::model::episode::Episode;
use crate::model::track::Track;
use crate::model::SpotifyType;

/// A track or an episode, told apart by the `type` field.
///
/// Anything else, including local files which have no catalog ids, is kept
/// as raw JSON in `Unknown`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlayableItem {
    Track(Box<Track>),
    Episode(Box<Episode>),
    Unknown(Value),
}

impl PlayableItem {
    pub fn kind(&self) -> SpotifyType {
        match self {
            Self::Track(_) => SpotifyType::Track,
            Self::Episode(_) => SpotifyType::Episode,
            Self::Unknown(value) => value
                .get("type")
                .and_then(Value::as_str)
                .map(SpotifyType::from)
                .unwrap_or_else(|| SpotifyType::Other(String::new())),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Track(track) => Some(track.base.id.as_str()),
            Self::Episode(episode) => Some(episode.base.id.as_str()),
            Self::Unknown(value) => value.get("id").and_then(Value::as_str),
        }
    }

    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            Self::Track(track) => Some(track.base.duration_ms),
            Self::Episode(episode) => Some(episode.base.duration_ms),
            Self::Unknown(value) => value.get("duration_ms").and_then(Value::as_u64),
        }
    }

    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Self::Track(track) => Some(&**track),
            _ => None,
        }
    }

    pub fn as_episode(&self) -> Option<&Episode> {
        match self {
            Self::Episode(episode) => Some(&**episode),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for PlayableItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_local = value.get("is_local").and_then(Value::as_bool).unwrap_or(false);

        match value.get("type").and_then(Value::as_str) {
            Some("track") => match serde_json::from_value::<Track>(value.clone()) {
                Ok(track) => Ok(Self::Track(Box::new(track))),
                Err(err) if is_local => {
                    debug!("local track kept as raw json: {}", err);
                    Ok(Self::Unknown(value))
                }
                Err(err) => Err(D::Error::custom(err)),
            },
            Some("episode") => serde_json::from_value::<Episode>(value)
                .map(|episode| Self::Episode(Box::new(episode)))
                .map_err(D::Error::custom),
            other => {
                debug!("unrecognized playable item type: {:?}", other);
                Ok(Self::Unknown(value))
            }
        }
    }
}
