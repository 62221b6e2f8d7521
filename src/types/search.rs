use serde::Serialize;
use serde_json::Value;

use super::{Album, Artist, Audiobook, Episode, ParseError, Playlist, Show, Track};

/// Item types accepted by the search endpoint.
pub const SEARCH_TYPES: [&str; 7] = [
    "album",
    "artist",
    "playlist",
    "track",
    "show",
    "episode",
    "audiobook",
];

/// One result of a search, typed after the envelope key it was found under.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchItem {
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
    Track(Track),
    Show(Show),
    Episode(Episode),
    Audiobook(Audiobook),
}

impl SearchItem {
    /// Parses one element of the page found under `envelope` (`"albums"`,
    /// `"tracks"`, ...). Unknown envelopes yield `None`.
    pub fn parse(envelope: &str, value: &Value) -> Option<Result<Self, ParseError>> {
        let parsed = match envelope {
            "albums" => Album::from_json(value).map(SearchItem::Album),
            "artists" => Artist::from_json(value).map(SearchItem::Artist),
            "playlists" => Playlist::from_json(value).map(SearchItem::Playlist),
            "tracks" => Track::from_json(value).map(SearchItem::Track),
            "shows" => Show::from_json(value).map(SearchItem::Show),
            "episodes" => Episode::from_json(value).map(SearchItem::Episode),
            "audiobooks" => Audiobook::from_json(value).map(SearchItem::Audiobook),
            _ => return None,
        };
        Some(parsed)
    }

    /// `true` for the plural keys search results are wrapped in.
    pub fn is_envelope(key: &str) -> bool {
        key.strip_suffix('s')
            .is_some_and(|kind| SEARCH_TYPES.contains(&kind))
    }

    pub fn name(&self) -> &str {
        match self {
            SearchItem::Album(i) => &i.name,
            SearchItem::Artist(i) => &i.name,
            SearchItem::Playlist(i) => &i.name,
            SearchItem::Track(i) => &i.name,
            SearchItem::Show(i) => &i.name,
            SearchItem::Episode(i) => &i.name,
            SearchItem::Audiobook(i) => &i.name,
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            SearchItem::Album(i) => &i.uri,
            SearchItem::Artist(i) => &i.uri,
            SearchItem::Playlist(i) => &i.uri,
            SearchItem::Track(i) => &i.uri,
            SearchItem::Show(i) => &i.uri,
            SearchItem::Episode(i) => &i.uri,
            SearchItem::Audiobook(i) => &i.uri,
        }
    }
}
