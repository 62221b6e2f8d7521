use serde::Serialize;
use serde_json::{Value, json};

use super::{
    QueryOptions, SpotifyClient,
    client::{envelope_array, parse},
    query::with_query,
};
use crate::{
    error::{Error, ErrorKind, Result},
    transport::{Method, Transport},
    types::{CursorPaging, Device, PlayHistory, PlaybackState, Queue},
    validate::{self, REPEAT_STATES},
};

/// Body of `PUT /me/player/play`. Leave everything unset to resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartPlayback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    /// `{"position": 5}` or `{"uri": "spotify:track:..."}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_ms: Option<u64>,
}

fn with_device(path: &str, device_id: Option<&str>) -> Result<String> {
    match device_id {
        Some(device_id) => {
            validate::id(device_id, "device_id")?;
            Ok(with_query(path, &[("device_id", device_id.to_string())]))
        }
        None => Ok(path.to_string()),
    }
}

impl<T: Transport> SpotifyClient<T> {
    /// `GET /me/player`; `None` when nothing is playing.
    pub async fn get_playback_state(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Option<PlaybackState>> {
        validate::token(token)?;
        opts.validate()?;

        let raw = self
            .send(
                Method::Get,
                &with_query("me/player", &opts.pairs()),
                None,
                token,
            )
            .await?;
        optional_state(&raw)
    }

    /// `PUT /me/player`
    pub async fn transfer_playback(
        &self,
        device_id: &str,
        play: Option<bool>,
        token: &str,
    ) -> Result<()> {
        validate::id(device_id, "device_id")?;
        validate::token(token)?;

        let mut body = json!({ "device_ids": [device_id] });
        if let Some(play) = play {
            body["play"] = json!(play);
        }
        self.send(Method::Put, "me/player", Some(&body), token)
            .await?;
        Ok(())
    }

    /// `GET /me/player/devices`
    pub async fn get_available_devices(&self, token: &str) -> Result<Vec<Device>> {
        validate::token(token)?;

        let raw = self
            .send(Method::Get, "me/player/devices", None, token)
            .await?;
        envelope_array(&raw, "devices")?
            .iter()
            .map(|device| parse(device, Device::from_json))
            .collect()
    }

    /// `GET /me/player/currently-playing`; `None` when nothing is playing.
    pub async fn get_currently_playing_track(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Option<PlaybackState>> {
        validate::token(token)?;
        opts.validate()?;

        let raw = self
            .send(
                Method::Get,
                &with_query("me/player/currently-playing", &opts.pairs()),
                None,
                token,
            )
            .await?;
        optional_state(&raw)
    }

    /// `PUT /me/player/play`
    pub async fn start_resume_playback(
        &self,
        token: &str,
        device_id: Option<&str>,
        playback: &StartPlayback,
    ) -> Result<()> {
        validate::token(token)?;
        let path = with_device("me/player/play", device_id)?;
        if let Some(context_uri) = &playback.context_uri {
            validate::id(context_uri, "context_uri")?;
        }
        if let Some(uris) = &playback.uris {
            validate::validate_id_list(&json!(uris), "uris", usize::MAX)?;
        }

        let body = serde_json::to_value(playback).map_err(Error::json_decode)?;
        self.send(Method::Put, &path, Some(&body), token).await?;
        Ok(())
    }

    /// `PUT /me/player/pause`
    pub async fn pause_playback(&self, token: &str, device_id: Option<&str>) -> Result<()> {
        validate::token(token)?;
        let path = with_device("me/player/pause", device_id)?;

        self.send(Method::Put, &path, None, token).await?;
        Ok(())
    }

    /// `POST /me/player/next`
    pub async fn skip_to_next(&self, token: &str, device_id: Option<&str>) -> Result<()> {
        validate::token(token)?;
        let path = with_device("me/player/next", device_id)?;

        self.send(Method::Post, &path, None, token).await?;
        Ok(())
    }

    /// `POST /me/player/previous`
    pub async fn skip_to_previous(&self, token: &str, device_id: Option<&str>) -> Result<()> {
        validate::token(token)?;
        let path = with_device("me/player/previous", device_id)?;

        self.send(Method::Post, &path, None, token).await?;
        Ok(())
    }

    /// `PUT /me/player/seek?position_ms=...`
    pub async fn seek_to_position(
        &self,
        token: &str,
        position_ms: i64,
        device_id: Option<&str>,
    ) -> Result<()> {
        validate::token(token)?;
        validate::validate_non_negative(position_ms, "position_ms")?;
        let path = with_device(
            &with_query("me/player/seek", &[("position_ms", position_ms.to_string())]),
            device_id,
        )?;

        self.send(Method::Put, &path, None, token).await?;
        Ok(())
    }

    /// `PUT /me/player/repeat?state=...`; `state` is one of off, track, context.
    pub async fn set_repeat_mode(
        &self,
        token: &str,
        state: &str,
        device_id: Option<&str>,
    ) -> Result<()> {
        validate::token(token)?;
        validate::validate_one_of(state, "state", &REPEAT_STATES)?;
        let path = with_device(
            &with_query("me/player/repeat", &[("state", state.to_string())]),
            device_id,
        )?;

        self.send(Method::Put, &path, None, token).await?;
        Ok(())
    }

    /// `PUT /me/player/volume?volume_percent=...`; accepts 0 to 100.
    pub async fn set_playback_volume(
        &self,
        token: &str,
        volume_percent: i64,
        device_id: Option<&str>,
    ) -> Result<()> {
        validate::token(token)?;
        validate::validate_range(volume_percent, "volume_percent", 0, 100)?;
        let path = with_device(
            &with_query(
                "me/player/volume",
                &[("volume_percent", volume_percent.to_string())],
            ),
            device_id,
        )?;

        self.send(Method::Put, &path, None, token).await?;
        Ok(())
    }

    /// `PUT /me/player/shuffle?state=...`
    ///
    /// Takes the state as JSON so loosely typed input (e.g. a CLI argument
    /// forwarded verbatim) is rejected unless it is a boolean.
    pub async fn toggle_playback_shuffle(
        &self,
        token: &str,
        state: impl Into<Value>,
        device_id: Option<&str>,
    ) -> Result<()> {
        let state = state.into();
        validate::token(token)?;
        validate::validate_bool(&state, "state")?;
        let path = with_device(
            &with_query("me/player/shuffle", &[("state", state.to_string())]),
            device_id,
        )?;

        self.send(Method::Put, &path, None, token).await?;
        Ok(())
    }

    /// `GET /me/player/recently-played`; `after` and `before` are exclusive.
    pub async fn get_recently_played_tracks(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<CursorPaging<PlayHistory>> {
        validate::token(token)?;
        opts.validate()?;
        if opts.after.is_some() && opts.before.is_some() {
            return Err(Error::new(
                ErrorKind::InvalidType,
                "Only one of after and before may be set",
            )
            .with_detail("field", "after"));
        }

        self.get_parsed("me/player/recently-played", opts, token, |v| {
            CursorPaging::parse(v, PlayHistory::from_json)
        })
        .await
    }

    /// `GET /me/player/queue`
    pub async fn get_the_users_queue(&self, token: &str) -> Result<Queue> {
        validate::token(token)?;

        self.get_parsed(
            "me/player/queue",
            &QueryOptions::default(),
            token,
            Queue::from_json,
        )
        .await
    }

    /// `POST /me/player/queue?uri=...`
    pub async fn add_item_to_playback_queue(
        &self,
        uri: &str,
        token: &str,
        device_id: Option<&str>,
    ) -> Result<()> {
        validate::id(uri, "uri")?;
        validate::token(token)?;
        let path = with_device(
            &with_query("me/player/queue", &[("uri", uri.to_string())]),
            device_id,
        )?;

        self.send(Method::Post, &path, None, token).await?;
        Ok(())
    }
}

// 204 No Content arrives from the transport as null.
fn optional_state(raw: &Value) -> Result<Option<PlaybackState>> {
    if raw.is_null() {
        return Ok(None);
    }
    if !raw.is_object() {
        return Err(Error::unexpected_response(
            "Expected a playback state object",
            raw,
        ));
    }
    parse(raw, PlaybackState::from_json).map(Some)
}
