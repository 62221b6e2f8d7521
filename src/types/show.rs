use serde::Serialize;
use serde_json::Value;

use super::{
    Copyright, DEFAULT_ID, DEFAULT_URI, ExternalUrls, Image, Paging, ParseError, Restrictions,
    ResumePoint, count, flag, opt_array_lenient, opt_object, strings, text, text_or,
};

/// A podcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub available_markets: Option<Vec<String>>,
    pub copyrights: Option<Vec<Copyright>>,
    pub description: Option<String>,
    pub html_description: Option<String>,
    pub explicit: Option<bool>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub is_externally_hosted: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub media_type: Option<String>,
    pub publisher: Option<String>,
    pub total_episodes: Option<u64>,
    pub episodes: Option<Paging<Episode>>,
}

impl Show {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Show {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Show"),
            kind: text_or(value, "type", "show"),
            uri: text_or(value, "uri", DEFAULT_URI),
            available_markets: strings(value, "available_markets"),
            copyrights: opt_array_lenient(value, "copyrights", Copyright::from_json),
            description: text(value, "description"),
            html_description: text(value, "html_description"),
            explicit: flag(value, "explicit"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            href: text(value, "href"),
            images: opt_array_lenient(value, "images", Image::from_json),
            is_externally_hosted: flag(value, "is_externally_hosted"),
            languages: strings(value, "languages"),
            media_type: text(value, "media_type"),
            publisher: text(value, "publisher"),
            total_episodes: count(value, "total_episodes"),
            episodes: opt_object(value, "episodes", |v| Paging::parse(v, Episode::from_json)),
        })
    }
}

/// A podcast episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub audio_preview_url: Option<String>,
    pub description: Option<String>,
    pub html_description: Option<String>,
    pub duration_ms: Option<u64>,
    pub explicit: Option<bool>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub is_externally_hosted: Option<bool>,
    pub is_playable: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub resume_point: Option<ResumePoint>,
    pub restrictions: Option<Restrictions>,
    pub show: Option<Show>,
}

impl Episode {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Episode {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Episode"),
            kind: text_or(value, "type", "episode"),
            uri: text_or(value, "uri", DEFAULT_URI),
            audio_preview_url: text(value, "audio_preview_url"),
            description: text(value, "description"),
            html_description: text(value, "html_description"),
            duration_ms: count(value, "duration_ms"),
            explicit: flag(value, "explicit"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            href: text(value, "href"),
            images: opt_array_lenient(value, "images", Image::from_json),
            is_externally_hosted: flag(value, "is_externally_hosted"),
            is_playable: flag(value, "is_playable"),
            languages: strings(value, "languages"),
            release_date: text(value, "release_date"),
            release_date_precision: text(value, "release_date_precision"),
            resume_point: opt_object(value, "resume_point", ResumePoint::from_json),
            restrictions: opt_object(value, "restrictions", Restrictions::from_json),
            show: opt_object(value, "show", Show::from_json),
        })
    }
}
