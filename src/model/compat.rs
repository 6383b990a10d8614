//! Lenient decoders for fields whose live shape differs from the documented one.

// Use 3rd party
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Toggle {
    Bool(bool),
    Text(String),
}

/// Accepts `true`/`false` as well as `"on"`/`"off"`.
pub fn on_off<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Toggle::deserialize(deserializer)? {
        Toggle::Bool(value) => Ok(value),
        Toggle::Text(text) => match text.as_str() {
            "on" => Ok(true),
            "off" => Ok(false),
            other => Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(other),
                &"\"on\" or \"off\"",
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct PlaybackFlags {
        #[serde(default, deserialize_with = "on_off")]
        shuffle: bool,
    }

    #[test]
    fn shuffle_accepts_words() {
        let on: PlaybackFlags = serde_json::from_value(json!({ "shuffle": "on" })).unwrap();
        assert!(on.shuffle);
        let off: PlaybackFlags = serde_json::from_value(json!({ "shuffle": "off" })).unwrap();
        assert!(!off.shuffle);
        let plain: PlaybackFlags = serde_json::from_value(json!({ "shuffle": true })).unwrap();
        assert!(plain.shuffle);
        assert!(serde_json::from_value::<PlaybackFlags>(json!({ "shuffle": "maybe" })).is_err());
    }
}
