use serde::Serialize;
use serde_json::Value;

use super::{
    Author, Copyright, DEFAULT_ID, DEFAULT_URI, ExternalUrls, Image, Narrator, Paging, ParseError,
    Restrictions, ResumePoint, count, flag, opt_array_lenient, opt_object, strings, text, text_or,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audiobook {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub authors: Option<Vec<Author>>,
    pub narrators: Option<Vec<Narrator>>,
    pub available_markets: Option<Vec<String>>,
    pub copyrights: Option<Vec<Copyright>>,
    pub description: Option<String>,
    pub html_description: Option<String>,
    pub edition: Option<String>,
    pub explicit: Option<bool>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub languages: Option<Vec<String>>,
    pub media_type: Option<String>,
    pub publisher: Option<String>,
    pub total_chapters: Option<u64>,
    pub chapters: Option<Paging<Chapter>>,
}

impl Audiobook {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Audiobook {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Audiobook"),
            kind: text_or(value, "type", "audiobook"),
            uri: text_or(value, "uri", DEFAULT_URI),
            authors: opt_array_lenient(value, "authors", Author::from_json),
            narrators: opt_array_lenient(value, "narrators", Narrator::from_json),
            available_markets: strings(value, "available_markets"),
            copyrights: opt_array_lenient(value, "copyrights", Copyright::from_json),
            description: text(value, "description"),
            html_description: text(value, "html_description"),
            edition: text(value, "edition"),
            explicit: flag(value, "explicit"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            href: text(value, "href"),
            images: opt_array_lenient(value, "images", Image::from_json),
            languages: strings(value, "languages"),
            media_type: text(value, "media_type"),
            publisher: text(value, "publisher"),
            total_chapters: count(value, "total_chapters"),
            chapters: opt_object(value, "chapters", |v| Paging::parse(v, Chapter::from_json)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub audio_preview_url: Option<String>,
    pub available_markets: Option<Vec<String>>,
    pub chapter_number: Option<u64>,
    pub description: Option<String>,
    pub html_description: Option<String>,
    pub duration_ms: Option<u64>,
    pub explicit: Option<bool>,
    pub external_urls: Option<ExternalUrls>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub is_playable: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub release_date: Option<String>,
    pub release_date_precision: Option<String>,
    pub resume_point: Option<ResumePoint>,
    pub restrictions: Option<Restrictions>,
    pub audiobook: Option<Audiobook>,
}

impl Chapter {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Chapter {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Chapter"),
            kind: text_or(value, "type", "chapter"),
            uri: text_or(value, "uri", DEFAULT_URI),
            audio_preview_url: text(value, "audio_preview_url"),
            available_markets: strings(value, "available_markets"),
            chapter_number: count(value, "chapter_number"),
            description: text(value, "description"),
            html_description: text(value, "html_description"),
            duration_ms: count(value, "duration_ms"),
            explicit: flag(value, "explicit"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            href: text(value, "href"),
            images: opt_array_lenient(value, "images", Image::from_json),
            is_playable: flag(value, "is_playable"),
            languages: strings(value, "languages"),
            release_date: text(value, "release_date"),
            release_date_precision: text(value, "release_date_precision"),
            resume_point: opt_object(value, "resume_point", ResumePoint::from_json),
            restrictions: opt_object(value, "restrictions", Restrictions::from_json),
            audiobook: opt_object(value, "audiobook", Audiobook::from_json),
        })
    }
}
