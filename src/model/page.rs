//! Collection envelopes.

// Use 3rd party
use log::debug;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Offset based page of items.
///
/// `next` and `previous` are `None` when the field is missing and
/// `Some(None)` when the API sent `null`, meaning there is no such page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub next: Option<Option<String>>,
    pub offset: u32,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub previous: Option<Option<String>>,
    pub total: u32,
}

impl<T> Paging<T> {
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.as_deref())
    }

    pub fn previous_url(&self) -> Option<&str> {
        self.previous.as_ref().and_then(|link| link.as_deref())
    }

    pub fn has_next(&self) -> bool {
        self.next_url().is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_url().is_some()
    }

    /// The API never returns more items than the requested limit.
    pub fn is_within_limit(&self) -> bool {
        self.items.len() <= self.limit as usize
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    /// Key of the next page, `None` on the last one.
    pub after: Option<String>,
}

/// Forward-only page keyed by an opaque cursor, used by the play history.
/// There is no offset and no previous page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorPaging<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub next: Option<Option<String>>,
    pub cursors: Option<Cursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl<T> CursorPaging<T> {
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.as_deref())
    }

    pub fn after(&self) -> Option<&str> {
        self.cursors.as_ref().and_then(|cursors| cursors.after.as_deref())
    }

    pub fn is_within_limit(&self) -> bool {
        self.items.len() <= self.limit as usize
    }
}

/// A nested collection that arrives either as a [`Paging`] envelope or as a
/// bare list, depending on the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Paging<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paged(page) => &page.items,
            Self::Plain(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged(page) => page.items,
            Self::Plain(items) => items,
        }
    }

    /// Size of the whole collection, which for a page may exceed `items()`.
    pub fn total(&self) -> usize {
        match self {
            Self::Paged(page) => page.total as usize,
            Self::Plain(items) => items.len(),
        }
    }

    pub fn is_paged(&self) -> bool {
        matches!(self, Self::Paged(_))
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            return serde_json::from_value(value)
                .map(Self::Plain)
                .map_err(D::Error::custom);
        }

        serde_json::from_value(value).map(Self::Paged).map_err(|err| {
            debug!("listing did not decode as a page: {}", err);
            D::Error::custom(err)
        })
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::Plain(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_page() {
        let page: Paging<u32> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/me/albums?offset=0&limit=2",
            "items": [1, 2],
            "limit": 2,
            "next": "https://api.spotify.com/v1/me/albums?offset=2&limit=2",
            "offset": 0,
            "previous": null,
            "total": 5
        }))
        .unwrap();

        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.previous, Some(None));
        assert!(page.is_within_limit());
    }

    #[test]
    fn null_and_missing_links_survive_round_trip() {
        let body = json!({
            "href": "https://api.spotify.com/v1/me/shows",
            "items": [],
            "limit": 20,
            "next": null,
            "offset": 0,
            "total": 0
        });
        let page: Paging<u32> = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(page.next, Some(None));
        assert_eq!(page.previous, None);
        assert_eq!(serde_json::to_value(&page).unwrap(), body);
    }

    #[test]
    fn cursor_page_has_no_offset() {
        let page: CursorPaging<u32> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/me/player/recently-played?limit=1",
            "items": [7],
            "limit": 1,
            "next": "https://api.spotify.com/v1/me/player/recently-played?before=1&limit=1",
            "cursors": { "after": "1626000000000" },
            "total": 50
        }))
        .unwrap();
        assert_eq!(page.after(), Some("1626000000000"));

        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("offset").is_none());
        assert!(value.get("previous").is_none());
    }

    #[test]
    fn listing_accepts_page_or_list() {
        let paged: Listing<u32> = serde_json::from_value(json!({
            "href": "https://api.spotify.com/v1/albums/1/tracks",
            "items": [1, 2, 3],
            "limit": 3,
            "next": "https://api.spotify.com/v1/albums/1/tracks?offset=3",
            "offset": 0,
            "previous": null,
            "total": 12
        }))
        .unwrap();
        assert!(paged.is_paged());
        assert_eq!(paged.items(), &[1, 2, 3]);
        assert_eq!(paged.total(), 12);

        let plain: Listing<u32> = serde_json::from_value(json!([4, 5])).unwrap();
        assert!(!plain.is_paged());
        assert_eq!(plain.total(), 2);
        assert_eq!(plain.into_items(), vec![4, 5]);
    }

    #[test]
    fn listing_reports_the_item_error() {
        let err = serde_json::from_value::<Listing<u32>>(json!({
            "href": "https://api.spotify.com/v1/albums/1/tracks",
            "items": ["one"],
            "limit": 1,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": 1
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type: string \"one\""));
        assert!(!err.to_string().contains("did not match any variant"));

        let err = serde_json::from_value::<Listing<u32>>(json!(["one"])).unwrap_err();
        assert!(err.to_string().contains("invalid type: string \"one\""));
    }
}
