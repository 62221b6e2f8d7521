use serde::Serialize;
use serde_json::Value;

use super::{
    DEFAULT_ID, DEFAULT_URI, ExternalUrls, Followers, Image, Paging, ParseError, PlayableItem,
    User, flag, opt_array_lenient, opt_object, text, text_or,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub collaborative: Option<bool>,
    pub description: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub followers: Option<Followers>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub owner: Option<User>,
    pub public: Option<bool>,
    pub snapshot_id: Option<String>,
    /// Full playlists carry a page of items; simplified playlists only carry
    /// `href` and `total`, which parse to a page without items.
    pub tracks: Option<Paging<PlaylistItem>>,
}

impl Playlist {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Playlist {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Untitled Playlist"),
            kind: text_or(value, "type", "playlist"),
            uri: text_or(value, "uri", DEFAULT_URI),
            collaborative: flag(value, "collaborative"),
            description: text(value, "description"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            followers: opt_object(value, "followers", Followers::from_json),
            href: text(value, "href"),
            images: opt_array_lenient(value, "images", Image::from_json),
            owner: opt_object(value, "owner", User::from_json),
            public: flag(value, "public"),
            snapshot_id: text(value, "snapshot_id"),
            tracks: opt_object(value, "tracks", |v| Paging::parse(v, PlaylistItem::from_json)),
        })
    }
}

/// An entry of a playlist: a track or an episode plus who added it and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub added_by: Option<User>,
    pub is_local: Option<bool>,
    pub track: Option<PlayableItem>,
}

impl PlaylistItem {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(PlaylistItem {
            added_at: text(value, "added_at"),
            added_by: opt_object(value, "added_by", User::from_json),
            is_local: flag(value, "is_local"),
            track: opt_object(value, "track", PlayableItem::from_json),
        })
    }
}

/// Version identifier returned by playlist mutations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotId {
    pub snapshot_id: String,
}

impl SnapshotId {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        match text(value, "snapshot_id") {
            Some(snapshot_id) => Ok(SnapshotId { snapshot_id }),
            None => Err(ParseError::MissingRequiredField {
                entity: "SnapshotId",
                fields: vec!["snapshot_id"],
            }),
        }
    }
}
