//! Items from the user's library, paired with the time they were saved.

// Use 3rd party
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Use built-in library
use std::fmt;
use std::marker::PhantomData;

// Use local
use crate::model::album::Album;
use crate::model::episode::Episode;
use crate::model::show::Show;
use crate::model::track::Track;

/// A resource that can be saved to the user's library. `KEY` is the field
/// name the saved item sits under, which is also its kind tag.
pub trait Saveable: Serialize + DeserializeOwned {
    const KEY: &'static str;
}

impl Saveable for Album {
    const KEY: &'static str = "album";
}

impl Saveable for Track {
    const KEY: &'static str = "track";
}

impl Saveable for Episode {
    const KEY: &'static str = "episode";
}

impl Saveable for Show {
    const KEY: &'static str = "show";
}

#[derive(Clone, Debug, PartialEq)]
pub struct Saved<T> {
    /// ISO 8601 timestamp of when the item was saved.
    pub added_at: String,
    pub item: T,
}

pub type SavedAlbum = Saved<Album>;
pub type SavedTrack = Saved<Track>;
pub type SavedEpisode = Saved<Episode>;
pub type SavedShow = Saved<Show>;

impl<T: Saveable> Serialize for Saved<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("added_at", &self.added_at)?;
        map.serialize_entry(T::KEY, &self.item)?;
        map.end()
    }
}

struct SavedVisitor<T>(PhantomData<T>);

impl<'de, T: Saveable> Visitor<'de> for SavedVisitor<T> {
    type Value = Saved<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a saved {} object", T::KEY)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut added_at: Option<String> = None;
        let mut item: Option<T> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == "added_at" {
                added_at = Some(map.next_value()?);
            } else if key == T::KEY {
                item = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(Saved {
            added_at: added_at.ok_or_else(|| de::Error::missing_field("added_at"))?,
            item: item.ok_or_else(|| de::Error::missing_field(T::KEY))?,
        })
    }
}

impl<'de, T: Saveable> Deserialize<'de> for Saved<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SavedVisitor(PhantomData))
    }
}
