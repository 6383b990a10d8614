//! Request shapes sent to the API.

// Use 3rd party
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Use built-in library
use std::fmt::Display;

// Use local
use crate::model::audio::AudioFeatures;

pub const MAX_SEEDS: usize = 5;
pub const MAX_RECOMMENDATIONS: u32 = 100;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("at least one seed artist, genre or track is required")]
    MissingSeed,
    #[error("{0} seeds given, at most 5 are allowed")]
    TooManySeeds(usize),
    #[error("limit {0} is outside 1..=100")]
    LimitOutOfRange(u32),
    #[error("min_{0} is greater than max_{0}")]
    InvertedBound(&'static str),
    #[error("playlist name is empty")]
    EmptyName,
    #[error("collaborative playlists must not be public")]
    CollaborativePublic,
    #[error("query encode error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Minimum, maximum and target value of one tuneable attribute.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Bound<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub target: Option<T>,
}

impl<T: Copy + PartialOrd + Display> Bound<T> {
    pub fn new() -> Self {
        Self { min: None, max: None, target: None }
    }

    pub fn min(mut self, value: T) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: T) -> Self {
        self.max = Some(value);
        self
    }

    pub fn target(mut self, value: T) -> Self {
        self.target = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.target.is_none()
    }

    fn validate(&self, name: &'static str) -> QueryResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(QueryError::InvertedBound(name)),
            _ => Ok(()),
        }
    }

    fn push_pairs(&self, name: &str, pairs: &mut Vec<(String, String)>) {
        for (prefix, value) in [("min", self.min), ("max", self.max), ("target", self.target)].iter() {
            if let Some(value) = value {
                pairs.push((format!("{}_{}", prefix, name), value.to_string()));
            }
        }
    }
}

macro_rules! tuneable_attributes {
    ($($(#[$doc:meta])* $field:ident: $ty:ty,)*) => {
        /// Bounds on the tuneable attributes of recommended tracks.
        #[derive(Clone, Copy, Default, Debug, PartialEq)]
        pub struct TuneableAttributes {
            $( $(#[$doc])* pub $field: Bound<$ty>, )*
        }

        impl TuneableAttributes {
            fn validate(&self) -> QueryResult<()> {
                $( self.$field.validate(stringify!($field))?; )*
                Ok(())
            }

            fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
                $( self.$field.push_pairs(stringify!($field), pairs); )*
            }
        }

        impl RecommendationQuery {
            $(
                pub fn $field(mut self, bound: Bound<$ty>) -> Self {
                    self.attributes.$field = bound;
                    self
                }
            )*
        }
    };
}

tuneable_attributes! {
    acousticness: f64,
    danceability: f64,
    duration_ms: u64,
    energy: f64,
    instrumentalness: f64,
    /// Pitch class, 0 to 11.
    key: i32,
    liveness: f64,
    loudness: f64,
    /// 1 for major, 0 for minor.
    mode: i32,
    /// 0 to 100.
    popularity: u32,
    speechiness: f64,
    tempo: f64,
    time_signature: i32,
    valence: f64,
}

impl TuneableAttributes {
    /// Targets every attribute of an analyzed track, to ask for similar ones.
    pub fn targeting(features: &AudioFeatures) -> Self {
        Self {
            acousticness: Bound::new().target(features.acousticness),
            danceability: Bound::new().target(features.danceability),
            duration_ms: Bound::new().target(features.duration_ms),
            energy: Bound::new().target(features.energy),
            instrumentalness: Bound::new().target(features.instrumentalness),
            key: Bound::new().target(features.key),
            liveness: Bound::new().target(features.liveness),
            loudness: Bound::new().target(features.loudness),
            mode: Bound::new().target(features.mode),
            popularity: Bound::new(),
            speechiness: Bound::new().target(features.speechiness),
            tempo: Bound::new().target(features.tempo),
            time_signature: Bound::new().target(features.time_signature),
            valence: Bound::new().target(features.valence),
        }
    }
}

/// Query of the recommendations endpoint.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct RecommendationQuery {
    pub seed_artists: Vec<String>,
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub attributes: TuneableAttributes,
}

impl RecommendationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_artist(mut self, id: &str) -> Self {
        self.seed_artists.push(id.to_owned());
        self
    }

    pub fn seed_genre(mut self, genre: &str) -> Self {
        self.seed_genres.push(genre.to_owned());
        self
    }

    pub fn seed_track(mut self, id: &str) -> Self {
        self.seed_tracks.push(id.to_owned());
        self
    }

    pub fn market(mut self, market: &str) -> Self {
        self.market = Some(market.to_owned());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn attributes(mut self, attributes: TuneableAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn seed_count(&self) -> usize {
        self.seed_artists.len() + self.seed_genres.len() + self.seed_tracks.len()
    }

    pub fn validate(&self) -> QueryResult<()> {
        match self.seed_count() {
            0 => return Err(QueryError::MissingSeed),
            count if count > MAX_SEEDS => return Err(QueryError::TooManySeeds(count)),
            _ => {}
        }
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_RECOMMENDATIONS {
                return Err(QueryError::LimitOutOfRange(limit));
            }
        }
        self.attributes.validate()
    }

    /// The `key=value` pairs of the query, in a stable order.
    pub fn to_pairs(&self) -> QueryResult<Vec<(String, String)>> {
        self.validate()?;

        let mut pairs: Vec<(String, String)> = Vec::new();
        for (name, seeds) in [
            ("seed_artists", &self.seed_artists),
            ("seed_genres", &self.seed_genres),
            ("seed_tracks", &self.seed_tracks),
        ]
        .iter()
        {
            if !seeds.is_empty() {
                pairs.push((name.to_string(), seeds.join(",")));
            }
        }
        if let Some(market) = &self.market {
            pairs.push(("market".to_owned(), market.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        self.attributes.push_pairs(&mut pairs);

        Ok(pairs)
    }

    pub fn to_query_string(&self) -> QueryResult<String> {
        let pairs = self.to_pairs()?;
        debug!("recommendation query with {} parameters", pairs.len());
        serde_urlencoded::to_string(&pairs).map_err(Into::into)
    }
}

/// Body of the create-playlist endpoint.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatePlaylistQuery {
    pub name: String,
    /// The API defaults to a public playlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// The API defaults to a non collaborative playlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreatePlaylistQuery {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn collaborative(mut self, collaborative: bool) -> Self {
        self.collaborative = Some(collaborative);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    pub fn validate(&self) -> QueryResult<()> {
        if self.name.trim().is_empty() {
            return Err(QueryError::EmptyName);
        }
        if self.collaborative == Some(true) && self.public != Some(false) {
            return Err(QueryError::CollaborativePublic);
        }
        Ok(())
    }

    pub fn to_json(&self) -> QueryResult<String> {
        self.validate()?;
        serde_json::to_string(self).map_err(Into::into)
    }
}
