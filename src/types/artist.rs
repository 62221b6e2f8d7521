use serde::Serialize;
use serde_json::Value;

use super::{
    DEFAULT_ID, DEFAULT_URI, ExternalUrls, Followers, Image, ParseError, count, opt_array_lenient,
    opt_array_strict, opt_object, require, strings, text, text_or,
};

const REQUIRED: [&str; 4] = ["id", "name", "type", "uri"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub href: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub followers: Option<Followers>,
    pub genres: Option<Vec<String>>,
    pub images: Option<Vec<Image>>,
    pub popularity: Option<u64>,
}

impl Artist {
    /// Strict parser: `id`, `name`, `type` and `uri` must be present, and a
    /// malformed element of `images` fails the artist.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        require(value, "Artist", &REQUIRED)?;

        Ok(Artist {
            images: opt_array_strict(value, "images", Image::from_json)?,
            ..Self::fields(value)
        })
    }

    /// Lenient parser used for artists nested in tracks and nested albums.
    pub fn from_json_lenient(value: &Value) -> Result<Self, ParseError> {
        Ok(Artist {
            images: opt_array_lenient(value, "images", Image::from_json),
            ..Self::fields(value)
        })
    }

    fn fields(value: &Value) -> Self {
        Artist {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Unknown Artist"),
            kind: text_or(value, "type", "artist"),
            uri: text_or(value, "uri", DEFAULT_URI),
            href: text(value, "href"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            followers: opt_object(value, "followers", Followers::from_json),
            genres: strings(value, "genres"),
            images: None,
            popularity: count(value, "popularity"),
        }
    }
}
