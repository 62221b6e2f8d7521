use serde::Serialize;
use serde_json::Value;

use super::{
    Artist, Copyright, DEFAULT_ID, DEFAULT_URI, ExternalIds, ExternalUrls, Image, Paging,
    ParseError, Restrictions, Track, count, opt_array_lenient, opt_array_strict, opt_object,
    require, strings, text, text_or,
};

const REQUIRED: [&str; 4] = ["id", "name", "type", "uri"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub album_type: Option<String>,
    pub album_group: Option<String>,
    pub total_tracks: Option<u64>,
    pub available_markets: Option<Vec<String>>,
    pub external_urls: Option<ExternalUrls>,
    pub external_ids: Option<ExternalIds>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub restrictions: Option<Restrictions>,
    pub artists: Option<Vec<Artist>>,
    pub tracks: Option<Paging<Track>>,
    pub copyrights: Option<Vec<Copyright>>,
    pub genres: Option<Vec<String>>,
    pub label: Option<String>,
    pub popularity: Option<u64>,
}

impl Album {
    /// Strict parser: `id`, `name`, `type` and `uri` must be present.
    ///
    /// Elements of `artists` and `images` go through the strict [`Artist`]
    /// and [`Image`] parsers, so one malformed element fails the album.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        require(value, "Album", &REQUIRED)?;

        Ok(Album {
            artists: opt_array_strict(value, "artists", Artist::from_json)?,
            images: opt_array_strict(value, "images", Image::from_json)?,
            ..Self::fields(value)
        })
    }

    /// Lenient parser used for albums nested in tracks. Never fails.
    pub fn from_json_lenient(value: &Value) -> Result<Self, ParseError> {
        Ok(Album {
            artists: opt_array_lenient(value, "artists", Artist::from_json_lenient),
            images: opt_array_lenient(value, "images", Image::from_json),
            ..Self::fields(value)
        })
    }

    fn fields(value: &Value) -> Self {
        Album {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Album"),
            kind: text_or(value, "type", "album"),
            uri: text_or(value, "uri", DEFAULT_URI),
            album_type: text(value, "album_type"),
            album_group: text(value, "album_group"),
            total_tracks: count(value, "total_tracks"),
            available_markets: strings(value, "available_markets"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            external_ids: opt_object(value, "external_ids", ExternalIds::from_json),
            href: text(value, "href"),
            images: None,
            release_date: text(value, "release_date"),
            release_date_precision: text(value, "release_date_precision"),
            restrictions: opt_object(value, "restrictions", Restrictions::from_json),
            artists: None,
            tracks: opt_object(value, "tracks", |v| Paging::parse(v, Track::from_json)),
            copyrights: opt_array_lenient(value, "copyrights", Copyright::from_json),
            genres: strings(value, "genres"),
            label: text(value, "label"),
            popularity: count(value, "popularity"),
        }
    }
}
