//! Typed records for Web API objects and the parsers that build them.
//!
//! Responses are read as [`serde_json::Value`] and converted field by field
//! rather than through `#[derive(Deserialize)]`, because upstream payloads are
//! frequently incomplete: required fields get per-type defaults, optional
//! fields become `None` when missing or of the wrong type, and nested objects
//! or arrays of the wrong shape become `None` instead of failing the parent.
//!
//! Three parsers are strict: [`Artist::from_json`], [`Album::from_json`] and
//! the [`Image`] leaf reject objects missing their required fields with a
//! [`ParseError`]. Strictness carries through arrays (a malformed artist
//! inside an album's `artists` fails the album) but not through containers of
//! the wrong shape (`"artists": "oops"` simply yields `None`).
//!
//! Every record serialises back to the upstream field names, so feeding the
//! output of `serde_json::to_value(&record)` into the same parser reproduces
//! the record.

mod album;
mod artist;
mod audiobook;
mod category;
mod common;
mod paging;
mod player;
mod playlist;
mod search;
mod show;
mod token;
mod track;
mod user;

pub use album::Album;
pub use artist::Artist;
pub use audiobook::{Audiobook, Chapter};
pub use category::Category;
pub use common::{
    Author, Copyright, ExplicitContentSettings, ExternalIds, ExternalUrls, Followers, Image,
    Narrator, Restrictions, ResumePoint,
};
pub use paging::{CursorPaging, Cursors, Paging, Saved};
pub use player::{Context, Device, PlayHistory, PlayableItem, PlaybackState, Queue};
pub use playlist::{Playlist, PlaylistItem, SnapshotId};
pub use search::{SEARCH_TYPES, SearchItem};
pub use show::{Episode, Show};
pub use token::{PkceToken, Token};
pub use track::Track;
pub use user::User;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

pub(crate) const DEFAULT_ID: &str = "unknown";
pub(crate) const DEFAULT_URI: &str = "";

/// Failure of a strict parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{entity} requires the fields: {}", fields.join(", "))]
    MissingRequiredField {
        entity: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{entity} field `{field}` must be a string")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Signature shared by every record parser.
pub type Parser<T> = fn(&Value) -> Result<T, ParseError>;

/// `true` when `key` holds something other than null or `false`.
pub(crate) fn present(value: &Value, key: &str) -> bool {
    !matches!(value.get(key), None | Some(Value::Null) | Some(Value::Bool(false)))
}

/// Fails with [`ParseError::MissingRequiredField`] listing all of `fields`
/// when any of them is absent.
pub(crate) fn require(
    value: &Value,
    entity: &'static str,
    fields: &[&'static str],
) -> Result<(), ParseError> {
    if fields.iter().all(|f| present(value, f)) {
        return Ok(());
    }

    Err(ParseError::MissingRequiredField {
        entity,
        fields: fields.to_vec(),
    })
}

pub(crate) fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}

pub(crate) fn text_or(value: &Value, key: &str, default: &str) -> String {
    text(value, key).unwrap_or_else(|| default.to_string())
}

/// Integer fields are kept only when the JSON value is an integer; floats
/// and numeric-looking strings become `None`.
pub(crate) fn count(value: &Value, key: &str) -> Option<u64> {
    value.get(key).and_then(Value::as_u64)
}

pub(crate) fn signed(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

pub(crate) fn flag(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}

pub(crate) fn strings(value: &Value, key: &str) -> Option<Vec<String>> {
    value.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect()
    })
}

/// Parses `key` with `parser` when it holds an object, `None` otherwise.
pub(crate) fn opt_object<T>(value: &Value, key: &str, parser: Parser<T>) -> Option<T> {
    let nested = value.get(key).filter(|v| v.is_object())?;

    match parser(nested) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(field = key, error = %e, "dropping malformed nested object");
            None
        }
    }
}

/// Parses every element of the array at `key`; the first element that fails
/// fails the whole field. Anything but an array yields `Ok(None)`.
pub(crate) fn opt_array_strict<T>(
    value: &Value,
    key: &str,
    parser: Parser<T>,
) -> Result<Option<Vec<T>>, ParseError> {
    match value.get(key).and_then(Value::as_array) {
        Some(items) => items.iter().map(parser).collect::<Result<Vec<_>, _>>().map(Some),
        None => Ok(None),
    }
}

/// Parses every element of the array at `key`, dropping the ones that fail.
/// Anything but an array yields `None`.
pub(crate) fn opt_array_lenient<T>(value: &Value, key: &str, parser: Parser<T>) -> Option<Vec<T>> {
    let items = value.get(key).and_then(Value::as_array)?;

    Some(
        items
            .iter()
            .filter_map(|item| match parser(item) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!(field = key, error = %e, "dropping malformed array element");
                    None
                }
            })
            .collect(),
    )
}
