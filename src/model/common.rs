// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    /// Height in pixels, `None` when unknown.
    pub height: Option<u32>,
    /// Width in pixels, `None` when unknown.
    pub width: Option<u32>,
}

/// Known external URLs of an object, keyed by service.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

/// Industry identifiers of a track or album.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

open_enum! {
    pub enum CopyrightType {
        Copyright => "C",
        Performance => "P",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
    #[serde(rename = "type")]
    pub _type: CopyrightType,
}

open_enum! {
    pub enum RestrictionReason {
        Market => "market",
        Product => "product",
        Explicit => "explicit",
    }
}

/// Present on a track, album or episode when a content restriction applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub reason: RestrictionReason,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    /// Always `null` at the moment, the API does not list followers.
    pub href: Option<String>,
    pub total: u32,
}
