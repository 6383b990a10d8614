//! Error bodies and decoding of response bodies.

// Use 3rd party
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Possible errors when reading a Spotify response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("spotify error: {0}")]
    Api(#[from] ApiError),
    #[error("player error: {0}")]
    Player(#[from] PlayerError),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
}

impl ResponseError {
    /// HTTP status reported in the error body, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Player(err) => Some(err.error.status),
            Self::ParseJSON(_) => None,
        }
    }
}

pub type ResponseResult<T> = Result<T, ResponseError>;

#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

open_enum! {
    /// Why a player command failed.
    pub enum PlayerErrorReason {
        NoPrevTrack => "NO_PREV_TRACK",
        NoNextTrack => "NO_NEXT_TRACK",
        NoSpecificTrack => "NO_SPECIFIC_TRACK",
        AlreadyPaused => "ALREADY_PAUSED",
        NotPaused => "NOT_PAUSED",
        NotPlayingTrack => "NOT_PLAYING_TRACK",
        NotPlayingLocally => "NOT_PLAYING_LOCALLY",
        NotPlayingContext => "NOT_PLAYING_CONTEXT",
        EndlessContext => "ENDLESS_CONTEXT",
        ContextDisallow => "CONTEXT_DISALLOW",
        AlreadyPlaying => "ALREADY_PLAYING",
        RateLimited => "RATE_LIMITED",
        RemoteControlDisallow => "REMOTE_CONTROL_DISALLOW",
        DeviceNotControllable => "DEVICE_NOT_CONTROLLABLE",
        VolumeControlDisallow => "VOLUME_CONTROL_DISALLOW",
        NoActiveDevice => "NO_ACTIVE_DEVICE",
        PremiumRequired => "PREMIUM_REQUIRED",
        Unknown => "UNKNOWN",
    }
}

#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
#[error("{error} ({reason})")]
pub struct PlayerError {
    #[serde(flatten)]
    pub error: ApiError,
    pub reason: PlayerErrorReason,
}

/// The envelope errors are sent in: `{"error": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse<E> {
    pub error: E,
}

fn error_body(input: &str) -> Option<ResponseError> {
    if let Ok(body) = serde_json::from_str::<ErrorResponse<PlayerError>>(input) {
        return Some(body.error.into());
    }
    serde_json::from_str::<ErrorResponse<ApiError>>(input)
        .ok()
        .map(|body| body.error.into())
}

/// Decodes a response body into `T`, or into the error it carries.
pub fn convert_result<T: DeserializeOwned>(input: &str) -> ResponseResult<T> {
    if let Some(err) = error_body(input) {
        debug!("error body: {}", err);
        return Err(err);
    }

    serde_json::from_str::<T>(input).map_err(|err| {
        error!("could not decode {}: {}", std::any::type_name::<T>(), err);
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::artist::Artist;
    use crate::model::tests::fixture;

    #[test]
    fn body() {
        let artist: Artist = convert_result(&fixture("artist.json")).unwrap();
        assert_eq!(artist.base.name, "Band of Horses");
    }

    #[test]
    fn api_error() {
        let result = convert_result::<Artist>(r#"{"error": {"status": 401, "message": "The access token expired"}}"#);
        match result {
            Err(ResponseError::Api(err)) => {
                assert_eq!(err.status, 401);
                assert_eq!(err.to_string(), "401: The access token expired");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn player_error() {
        let err = convert_result::<Artist>(
            r#"{"error": {"status": 404, "message": "Player command failed: No active device found", "reason": "NO_ACTIVE_DEVICE"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.status(), Some(404));
        match err {
            ResponseError::Player(err) => {
                assert_eq!(err.reason, PlayerErrorReason::NoActiveDevice);
                assert_eq!(
                    err.to_string(),
                    "404: Player command failed: No active device found (NO_ACTIVE_DEVICE)"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unseen_player_reason() {
        let err = convert_result::<Artist>(
            r#"{"error": {"status": 403, "message": "Restricted", "reason": "AGE_RESTRICTED"}}"#,
        )
        .unwrap_err();
        match err {
            ResponseError::Player(err) => assert!(!err.reason.is_known()),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_body() {
        let err = convert_result::<Artist>(r#"{"id": 12}"#).unwrap_err();
        assert!(matches!(err, ResponseError::ParseJSON(_)));
        assert_eq!(err.status(), None);
    }
}
