//! Spotify URIs, such as `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`.

// Use 3rd party
use thiserror::Error;

// Use built-in library
use std::fmt;
use std::str::FromStr;

// Use local
use crate::model::SpotifyType;

const SCHEME: &str = "spotify";

#[derive(Debug, Error, PartialEq)]
pub enum UriError {
    #[error("uri does not start with `spotify:`: {0}")]
    Scheme(String),
    #[error("uri has no kind: {0}")]
    MissingKind(String),
    #[error("uri has no id: {0}")]
    MissingId(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpotifyUri {
    pub kind: SpotifyType,
    /// Everything after the kind. For local files this holds several
    /// colon separated parts.
    pub id: String,
}

impl SpotifyUri {
    pub fn new(kind: SpotifyType, id: &str) -> Self {
        Self {
            kind,
            id: id.to_owned(),
        }
    }
}

impl FromStr for SpotifyUri {
    type Err = UriError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        let mut parts = uri.splitn(3, ':');
        if parts.next() != Some(SCHEME) {
            return Err(UriError::Scheme(uri.to_owned()));
        }
        let kind = match parts.next() {
            Some(kind) if !kind.is_empty() => SpotifyType::from(kind),
            _ => return Err(UriError::MissingKind(uri.to_owned())),
        };
        match parts.next() {
            Some(id) if !id.is_empty() => Ok(Self::new(kind, id)),
            _ => Err(UriError::MissingId(uri.to_owned())),
        }
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", SCHEME, self.kind, self.id)
    }
}
