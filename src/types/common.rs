use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{ParseError, count, flag, text};

/// Cover art or profile picture. `url` is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u64>,
    pub width: Option<u64>,
}

impl Image {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let url = match value.get("url") {
            Some(Value::String(url)) => url.clone(),
            None | Some(Value::Null) => {
                return Err(ParseError::MissingRequiredField {
                    entity: "Image",
                    fields: vec!["url"],
                });
            }
            Some(_) => {
                return Err(ParseError::InvalidField {
                    entity: "Image",
                    field: "url",
                });
            }
        };

        Ok(Image {
            url,
            height: count(value, "height"),
            width: count(value, "width"),
        })
    }
}

/// Known external URLs, keyed by service (`spotify` in practice).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExternalUrls(pub BTreeMap<String, String>);

impl ExternalUrls {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(ExternalUrls(string_map(value)))
    }

    pub fn spotify(&self) -> Option<&str> {
        self.0.get("spotify").map(String::as_str)
    }
}

/// Industry identifiers such as `isrc`, `ean` and `upc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExternalIds(pub BTreeMap<String, String>);

impl ExternalIds {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(ExternalIds(string_map(value)))
    }

    pub fn isrc(&self) -> Option<&str> {
        self.0.get("isrc").map(String::as_str)
    }
}

fn string_map(value: &Value) -> BTreeMap<String, String> {
    value
        .as_object()
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Followers {
    pub href: Option<String>,
    pub total: Option<u64>,
}

impl Followers {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Followers {
            href: text(value, "href"),
            total: count(value, "total"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Copyright {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Copyright {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Copyright {
            text: text(value, "text"),
            kind: text(value, "type"),
        })
    }
}

/// Why content is unavailable (`market`, `product`, `explicit`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restrictions {
    pub reason: Option<String>,
}

impl Restrictions {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Restrictions {
            reason: text(value, "reason"),
        })
    }
}

/// Playback position of the current user inside an episode or chapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumePoint {
    pub fully_played: Option<bool>,
    pub resume_position_ms: Option<u64>,
}

impl ResumePoint {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(ResumePoint {
            fully_played: flag(value, "fully_played"),
            resume_position_ms: count(value, "resume_position_ms"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: Option<String>,
}

impl Author {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Author {
            name: text(value, "name"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrator {
    pub name: Option<String>,
}

impl Narrator {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Narrator {
            name: text(value, "name"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplicitContentSettings {
    pub filter_enabled: Option<bool>,
    pub filter_locked: Option<bool>,
}

impl ExplicitContentSettings {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(ExplicitContentSettings {
            filter_enabled: flag(value, "filter_enabled"),
            filter_locked: flag(value, "filter_locked"),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn image_requires_url_string() {
        let img = Image::from_json(&json!({
            "url": "https://i.scdn.co/image/ab67616d0000b273",
            "height": 640,
            "width": "640"
        }))
        .unwrap();
        assert_eq!(img.height, Some(640));
        assert_eq!(img.width, None);

        assert_eq!(
            Image::from_json(&json!({ "height": 64 })),
            Err(ParseError::MissingRequiredField {
                entity: "Image",
                fields: vec!["url"]
            })
        );
        assert_eq!(
            Image::from_json(&json!({ "url": 12 })),
            Err(ParseError::InvalidField {
                entity: "Image",
                field: "url"
            })
        );
    }

    #[test]
    fn external_urls_keep_only_strings() {
        let urls = ExternalUrls::from_json(&json!({
            "spotify": "https://open.spotify.com/album/1",
            "other": 3
        }))
        .unwrap();
        assert_eq!(urls.spotify(), Some("https://open.spotify.com/album/1"));
        assert_eq!(urls.0.len(), 1);
    }

    #[test]
    fn external_urls_serialize_as_plain_object() {
        let urls = ExternalUrls::from_json(&json!({ "spotify": "s" })).unwrap();
        assert_eq!(serde_json::to_value(&urls).unwrap(), json!({ "spotify": "s" }));
    }
}
