use serde::Serialize;
use serde_json::Value;

use super::{
    Episode, ExternalUrls, ParseError, Track, count, flag, opt_object, signed, text, text_or,
};

/// Something the player can play. Decoded from the `type` discriminator;
/// anything that is not `"episode"` (including a missing `type`) is a track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlayableItem {
    Track(Track),
    Episode(Episode),
}

impl PlayableItem {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        match value.get("type").and_then(Value::as_str) {
            Some("episode") => Episode::from_json(value).map(PlayableItem::Episode),
            _ => Track::from_json(value).map(PlayableItem::Track),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.id,
            PlayableItem::Episode(e) => &e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.name,
            PlayableItem::Episode(e) => &e.name,
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            PlayableItem::Track(t) => &t.uri,
            PlayableItem::Episode(e) => &e.uri,
        }
    }

    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            PlayableItem::Track(t) => t.duration_ms,
            PlayableItem::Episode(e) => e.duration_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_active: Option<bool>,
    pub is_private_session: Option<bool>,
    pub is_restricted: Option<bool>,
    pub supports_volume: Option<bool>,
    pub volume_percent: Option<u64>,
}

impl Device {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Device {
            id: text(value, "id"),
            name: text_or(value, "name", "Unknown Device"),
            kind: text_or(value, "type", "unknown"),
            is_active: flag(value, "is_active"),
            is_private_session: flag(value, "is_private_session"),
            is_restricted: flag(value, "is_restricted"),
            supports_volume: flag(value, "supports_volume"),
            volume_percent: count(value, "volume_percent"),
        })
    }
}

/// The album, playlist, artist or show a playback was started from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Context {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub href: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub uri: Option<String>,
}

impl Context {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Context {
            kind: text(value, "type"),
            href: text(value, "href"),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            uri: text(value, "uri"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub device: Option<Device>,
    pub repeat_state: Option<String>,
    pub shuffle_state: Option<bool>,
    pub context: Option<Context>,
    pub timestamp: Option<i64>,
    pub progress_ms: Option<u64>,
    pub is_playing: Option<bool>,
    pub item: Option<PlayableItem>,
    pub currently_playing_type: Option<String>,
}

impl PlaybackState {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(PlaybackState {
            device: opt_object(value, "device", Device::from_json),
            repeat_state: text(value, "repeat_state"),
            shuffle_state: flag(value, "shuffle_state"),
            context: opt_object(value, "context", Context::from_json),
            timestamp: signed(value, "timestamp"),
            progress_ms: count(value, "progress_ms"),
            is_playing: flag(value, "is_playing"),
            item: opt_object(value, "item", PlayableItem::from_json),
            currently_playing_type: text(value, "currently_playing_type"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Queue {
    pub currently_playing: Option<PlayableItem>,
    pub queue: Vec<PlayableItem>,
}

impl Queue {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let queue = value
            .get("queue")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .map(PlayableItem::from_json)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Queue {
            currently_playing: opt_object(value, "currently_playing", PlayableItem::from_json),
            queue,
        })
    }
}

/// An entry of the recently played list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayHistory {
    pub track: Option<Track>,
    pub played_at: Option<String>,
    pub context: Option<Context>,
}

impl PlayHistory {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(PlayHistory {
            track: opt_object(value, "track", Track::from_json),
            played_at: text(value, "played_at"),
            context: opt_object(value, "context", Context::from_json),
        })
    }
}
