use serde::Serialize;
use serde_json::Value;

use super::{
    Album, Artist, DEFAULT_ID, DEFAULT_URI, ExternalIds, ExternalUrls, ParseError, Restrictions,
    count, flag, opt_array_lenient, opt_object, strings, text, text_or,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub album: Option<Album>,
    pub artists: Option<Vec<Artist>>,
    pub available_markets: Option<Vec<String>>,
    pub disc_number: Option<u64>,
    pub duration_ms: Option<u64>,
    pub explicit: Option<bool>,
    pub external_ids: Option<ExternalIds>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub is_local: Option<bool>,
    pub is_playable: Option<bool>,
    pub popularity: Option<u64>,
    pub preview_url: Option<String>,
    pub restrictions: Option<Restrictions>,
    pub track_number: Option<u64>,
}

impl Track {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Track {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Track"),
            kind: text_or(value, "type", "track"),
            uri: text_or(value, "uri", DEFAULT_URI),
            album: opt_object(value, "album", Album::from_json_lenient),
            artists: opt_array_lenient(value, "artists", Artist::from_json_lenient),
            available_markets: strings(value, "available_markets"),
            disc_number: count(value, "disc_number"),
            duration_ms: count(value, "duration_ms"),
            explicit: flag(value, "explicit"),
            external_ids: opt_object(value, "external_ids", ExternalIds::from_json),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            href: text(value, "href"),
            is_local: flag(value, "is_local"),
            is_playable: flag(value, "is_playable"),
            popularity: count(value, "popularity"),
            preview_url: text(value, "preview_url"),
            restrictions: opt_object(value, "restrictions", Restrictions::from_json),
            track_number: count(value, "track_number"),
        })
    }

    /// Names of the track's artists joined with `", "`.
    pub fn artist_names(&self) -> String {
        self.artists
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
