//! Spotify-model is a set of typed shapes for the Spotify Web API.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! spotify-model = "0.1.0"
//! ```
//!
//! The crate only describes the bodies the API sends and accepts. Sending
//! requests, refreshing tokens and walking pages is left to the HTTP client
//! of your choice.
//!
//! ## Getting Started
//!
//! Every response body decodes through [`response::convert_result`], which
//! also turns the API's error envelope into a typed error.
//!
//! ### Examples
//!
//! ```rust
//! use spotify_model::model::artist::Artist;
//! use spotify_model::response::convert_result;
//!
//! let body = r#"{
//!     "external_urls": { "spotify": "https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF" },
//!     "followers": { "href": null, "total": 306565 },
//!     "genres": ["indie folk"],
//!     "href": "https://api.spotify.com/v1/artists/0OdUWJ0sBjDrqHygGUXeCF",
//!     "id": "0OdUWJ0sBjDrqHygGUXeCF",
//!     "images": [],
//!     "name": "Band of Horses",
//!     "popularity": 59,
//!     "type": "artist",
//!     "uri": "spotify:artist:0OdUWJ0sBjDrqHygGUXeCF"
//! }"#;
//!
//! let artist: Artist = convert_result(body).unwrap();
//! assert_eq!(artist.base.name, "Band of Horses");
//! ```
//!
//! Request shapes are built the same way they are sent:
//!
//! ```rust
//! use spotify_model::model::query::{Bound, RecommendationQuery};
//!
//! let query = RecommendationQuery::new()
//!     .seed_genre("indie")
//!     .limit(10)
//!     .danceability(Bound::new().min(0.6));
//! let encoded = query.to_query_string().unwrap();
//! assert!(encoded.contains("min_danceability=0.6"));
//! ```

#[macro_use]
mod macros;

pub mod auth;
pub mod model;
pub mod response;
pub mod uri;
