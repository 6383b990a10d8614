// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::common::{ExternalUrls, Followers, Image};
use crate::model::SpotifyType;

open_enum! {
    /// Subscription level of a user.
    pub enum ProductType {
        Free => "free",
        Open => "open",
        Premium => "premium",
    }
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplicitContentSettings {
    /// Explicit content should not be played.
    pub filter_enabled: bool,
    /// The user can't change the setting.
    pub filter_locked: bool,
}

/// What anyone can see of a user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<Followers>,
    pub href: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    #[serde(rename = "type")]
    pub _type: SpotifyType,
    pub uri: String,
}

/// The current user's own profile. `country`, `email` and `product` depend
/// on the scopes granted to the access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub base: PublicUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content: Option<ExplicitContentSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductType>,
}

impl PrivateUser {
    pub fn is_premium(&self) -> bool {
        self.product == Some(ProductType::Premium)
    }
}

impl From<PrivateUser> for PublicUser {
    fn from(user: PrivateUser) -> Self {
        user.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::fixture;
    use serde_json::json;

    #[test]
    fn current_user() {
        let user: PrivateUser = serde_json::from_str(&fixture("current_user.json")).unwrap();
        assert_eq!(user.base.id, "wizzler");
        assert_eq!(user.base.display_name.as_deref(), Some("JM Wizzler"));
        assert_eq!(user.base._type, SpotifyType::User);
        assert_eq!(user.country.as_deref(), Some("SE"));
        assert_eq!(user.email.as_deref(), Some("email@example.com"));
        assert_eq!(user.explicit_content, Some(ExplicitContentSettings { filter_enabled: false, filter_locked: false }));
        assert!(user.is_premium());
        assert_eq!(user.base.followers.as_ref().unwrap().total, 3829);
    }

    #[test]
    fn public_profile_without_name() {
        let user: PublicUser = serde_json::from_value(json!({
            "display_name": null,
            "external_urls": { "spotify": "https://open.spotify.com/user/smedjan" },
            "href": "https://api.spotify.com/v1/users/smedjan",
            "id": "smedjan",
            "type": "user",
            "uri": "spotify:user:smedjan"
        }))
        .unwrap();
        assert_eq!(user.display_name, None);
        assert_eq!(user.images, None);
    }

    #[test]
    fn unknown_product() {
        let mut value: serde_json::Value = serde_json::from_str(&fixture("current_user.json")).unwrap();
        value["product"] = json!("family");
        let user: PrivateUser = serde_json::from_value(value).unwrap();
        assert_eq!(user.product, Some(ProductType::Other("family".to_owned())));
        assert!(!user.is_premium());
    }
}
