// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::common::ExternalUrls;
use crate::model::compat::on_off;
use crate::model::playable::PlayableItem;
use crate::model::track::SimplifiedTrack;
use crate::model::SpotifyType;

open_enum! {
    pub enum DeviceType {
        Computer => "computer" | "Computer",
        Smartphone => "smartphone" | "Smartphone",
        Speaker => "speaker" | "Speaker",
    }
}

open_enum! {
    pub enum RepeatState {
        Track => "track",
        Context => "context",
        Off => "off",
    }
}

open_enum! {
    pub enum CurrentlyPlayingType {
        Track => "track",
        Episode => "episode",
        Ad => "ad",
        Unknown => "unknown",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Can be `None` for restricted devices.
    pub id: Option<String>,
    pub is_active: bool,
    pub is_private_session: bool,
    /// When set no Web API commands are accepted by the device.
    pub is_restricted: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub _type: DeviceType,
    #[serde(default)]
    pub volume_percent: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Devices {
    pub devices: Vec<Device>,
}

/// Reference to what the player is playing from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerContext {
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub href: Option<String>,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackAction {
    InterruptingPlayback,
    Pausing,
    Resuming,
    Seeking,
    SkippingNext,
    SkippingPrev,
    TogglingRepeatContext,
    TogglingRepeatTrack,
    TogglingShuffle,
    TransferringPlayback,
}

/// Playback actions that are not allowed right now. A missing flag means the
/// player did not report on that action.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContextDisallows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrupting_playback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pausing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resuming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipping_next: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipping_prev: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggling_repeat_context: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggling_repeat_track: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggling_shuffle: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transferring_playback: Option<bool>,
}

impl ContextDisallows {
    /// `Some(true)` when the action is disallowed, `None` when unreported.
    pub fn get(&self, action: PlaybackAction) -> Option<bool> {
        match action {
            PlaybackAction::InterruptingPlayback => self.interrupting_playback,
            PlaybackAction::Pausing => self.pausing,
            PlaybackAction::Resuming => self.resuming,
            PlaybackAction::Seeking => self.seeking,
            PlaybackAction::SkippingNext => self.skipping_next,
            PlaybackAction::SkippingPrev => self.skipping_prev,
            PlaybackAction::TogglingRepeatContext => self.toggling_repeat_context,
            PlaybackAction::TogglingRepeatTrack => self.toggling_repeat_track,
            PlaybackAction::TogglingShuffle => self.toggling_shuffle,
            PlaybackAction::TransferringPlayback => self.transferring_playback,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ActionsRepr {
    Nested { disallows: ContextDisallows },
    Flat(ContextDisallows),
}

impl From<ActionsRepr> for Actions {
    fn from(repr: ActionsRepr) -> Self {
        match repr {
            ActionsRepr::Nested { disallows } | ActionsRepr::Flat(disallows) => Self { disallows },
        }
    }
}

/// Playback actions available in the current context.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ActionsRepr")]
pub struct Actions {
    pub disallows: ContextDisallows,
}

/// What is playing right now.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    pub context: Option<PlayerContext>,
    pub currently_playing_type: CurrentlyPlayingType,
    pub is_playing: bool,
    pub item: Option<PlayableItem>,
    /// Progress into the item, `None` when nothing is playing.
    pub progress_ms: Option<u64>,
    /// Unix milliseconds timestamp of when the data was fetched.
    pub timestamp: u64,
}

/// Full playback state, including the device and player settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentlyPlayingContext {
    #[serde(flatten)]
    pub playing: CurrentlyPlaying,
    #[serde(default)]
    pub actions: Actions,
    pub device: Device,
    pub repeat_state: RepeatState,
    #[serde(deserialize_with = "on_off")]
    pub shuffle_state: bool,
}

impl CurrentlyPlayingContext {
    pub fn is_disallowed(&self, action: PlaybackAction) -> bool {
        self.actions.disallows.get(action).unwrap_or(false)
    }
}

impl From<CurrentlyPlayingContext> for CurrentlyPlaying {
    fn from(context: CurrentlyPlayingContext) -> Self {
        context.playing
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayHistory {
    pub context: Option<PlayerContext>,
    /// ISO 8601 timestamp.
    pub played_at: String,
    pub track: SimplifiedTrack,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    pub currently_playing: Option<PlayableItem>,
    pub queue: Vec<PlayableItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::page::CursorPaging;
    use crate::model::tests::fixture;
    use serde_json::json;

    #[test]
    fn playback_state() {
        let state: CurrentlyPlayingContext =
            serde_json::from_str(&fixture("playback_state.json")).unwrap();

        assert_eq!(state.device._type, DeviceType::Speaker);
        assert_eq!(state.device.volume_percent, Some(63));
        assert_eq!(state.repeat_state, RepeatState::Off);
        assert!(!state.shuffle_state);
        assert!(state.playing.is_playing);
        assert_eq!(state.playing.progress_ms, Some(44272));
        assert_eq!(state.playing.currently_playing_type, CurrentlyPlayingType::Track);
        assert_eq!(state.playing.context.as_ref().unwrap()._type, SpotifyType::Playlist);
        assert_eq!(state.playing.item.as_ref().unwrap().kind(), SpotifyType::Track);

        assert!(state.is_disallowed(PlaybackAction::Resuming));
        assert!(!state.is_disallowed(PlaybackAction::Pausing));
        assert_eq!(state.actions.disallows.get(PlaybackAction::Seeking), None);
    }

    #[test]
    fn playback_state_round_trip() {
        let state: CurrentlyPlayingContext =
            serde_json::from_str(&fixture("playback_state.json")).unwrap();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["currently_playing_type"], json!("track"));
        assert_eq!(value["item"]["type"], json!("track"));
        assert_eq!(value["actions"]["disallows"]["resuming"], json!(true));

        let again: CurrentlyPlayingContext = serde_json::from_value(value).unwrap();
        assert_eq!(again, state);
    }

    #[test]
    fn flat_actions_and_word_shuffle() {
        let mut value: serde_json::Value = serde_json::from_str(&fixture("playback_state.json")).unwrap();
        value["actions"] = json!({ "interrupting_playback": true, "skipping_prev": true });
        value["shuffle_state"] = json!("on");
        value["repeat_state"] = json!("context");

        let state: CurrentlyPlayingContext = serde_json::from_value(value).unwrap();
        assert!(state.shuffle_state);
        assert_eq!(state.repeat_state, RepeatState::Context);
        assert!(state.is_disallowed(PlaybackAction::SkippingPrev));
        assert!(state.is_disallowed(PlaybackAction::InterruptingPlayback));
    }

    #[test]
    fn nothing_playing() {
        let playing: CurrentlyPlaying = serde_json::from_value(json!({
            "context": null,
            "currently_playing_type": "ad",
            "is_playing": true,
            "item": null,
            "progress_ms": null,
            "timestamp": 1626000000000u64
        }))
        .unwrap();
        assert_eq!(playing.currently_playing_type, CurrentlyPlayingType::Ad);
        assert!(playing.item.is_none());
        assert!(playing.context.is_none());
    }

    #[test]
    fn episode_playing() {
        let episode: serde_json::Value = serde_json::from_str(&fixture("episode.json")).unwrap();
        let playing: CurrentlyPlaying = serde_json::from_value(json!({
            "context": null,
            "currently_playing_type": "episode",
            "is_playing": false,
            "item": episode,
            "progress_ms": 1200,
            "timestamp": 1626000000000u64
        }))
        .unwrap();
        assert_eq!(playing.currently_playing_type, CurrentlyPlayingType::Episode);
        assert!(playing.item.unwrap().as_episode().is_some());
    }

    #[test]
    fn devices() {
        let devices: Devices = serde_json::from_value(json!({
            "devices": [{
                "id": "5fbb3ba6aa454b5534c4ba43a8c7e8e45a63ad0e",
                "is_active": false,
                "is_private_session": true,
                "is_restricted": false,
                "name": "My fridge",
                "type": "Computer",
                "volume_percent": 100
            }, {
                "id": null,
                "is_active": false,
                "is_private_session": false,
                "is_restricted": true,
                "name": "Living room",
                "type": "CastAudio",
                "volume_percent": null
            }]
        }))
        .unwrap();
        assert_eq!(devices.devices[0]._type, DeviceType::Computer);
        assert_eq!(devices.devices[1]._type, DeviceType::Other("CastAudio".to_owned()));
        assert_eq!(devices.devices[1].id, None);
        assert_eq!(devices.devices[1].volume_percent, None);
    }

    #[test]
    fn device_type_in_lowercase() {
        let device: Device = serde_json::from_value(json!({
            "id": "5fbb3ba6aa454b5534c4ba43a8c7e8e45a63ad0e",
            "is_active": true,
            "is_private_session": false,
            "is_restricted": false,
            "name": "Kitchen",
            "type": "speaker",
            "volume_percent": 40
        }))
        .unwrap();
        assert_eq!(device._type, DeviceType::Speaker);
        assert!(device._type.is_known());
    }

    #[test]
    fn recently_played() {
        let page: CursorPaging<PlayHistory> =
            serde_json::from_str(&fixture("recently_played.json")).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.after(), Some("1626345678901"));
        assert_eq!(page.items[0].played_at, "2021-07-15T10:41:18.901Z");
        assert_eq!(page.items[0].track.name, "Cut To The Feeling");
        assert!(page.is_within_limit());
    }

    #[test]
    fn queue() {
        let track: serde_json::Value = serde_json::from_str(&fixture("track.json")).unwrap();
        let episode: serde_json::Value = serde_json::from_str(&fixture("episode.json")).unwrap();
        let queue: Queue = serde_json::from_value(json!({
            "currently_playing": track,
            "queue": [episode]
        }))
        .unwrap();
        assert_eq!(queue.currently_playing.unwrap().kind(), SpotifyType::Track);
        assert_eq!(queue.queue[0].kind(), SpotifyType::Episode);
    }
}
