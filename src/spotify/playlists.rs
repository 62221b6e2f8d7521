use serde::Serialize;
use serde_json::{Value, json};

use super::{
    QueryOptions, SpotifyClient,
    client::{parse, segment},
};
use crate::{
    error::{Error, ErrorKind, Result},
    transport::{Method, Transport},
    types::{Image, Paging, Playlist, PlaylistItem, SnapshotId},
    validate,
};

pub const MAX_PLAYLIST_ITEMS_PER_REQUEST: usize = 100;
/// Page size limit of `GET /playlists/{id}/tracks`.
pub const MAX_PLAYLIST_ITEMS_LIMIT: i64 = 100;

/// Body of playlist creation and detail changes. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PlaylistDetails {
    pub fn named(name: impl Into<String>) -> Self {
        PlaylistDetails {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn to_body(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::json_decode)
    }
}

impl<T: Transport> SpotifyClient<T> {
    /// `GET /playlists/{id}`
    pub async fn get_playlist(
        &self,
        playlist_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Playlist> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("playlists/{}", segment(playlist_id)),
            opts,
            token,
            Playlist::from_json,
        )
        .await
    }

    /// `PUT /playlists/{id}`
    pub async fn change_playlist_details(
        &self,
        playlist_id: &str,
        details: &PlaylistDetails,
        token: &str,
    ) -> Result<()> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;
        if *details == PlaylistDetails::default() {
            return Err(Error::new(
                ErrorKind::InvalidType,
                "details must change at least one field",
            )
            .with_detail("field", "details"));
        }

        let body = details.to_body()?;
        self.send(
            Method::Put,
            &format!("playlists/{}", segment(playlist_id)),
            Some(&body),
            token,
        )
        .await?;
        Ok(())
    }

    /// `GET /playlists/{id}/tracks`
    pub async fn get_playlist_items(
        &self,
        playlist_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<PlaylistItem>> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;
        opts.validate_with_max(MAX_PLAYLIST_ITEMS_LIMIT)?;

        self.get_parsed(
            &format!("playlists/{}/tracks", segment(playlist_id)),
            opts,
            token,
            |v| Paging::parse(v, PlaylistItem::from_json),
        )
        .await
    }

    /// `POST /playlists/{id}/tracks`, at most 100 uris. Items are appended
    /// unless `position` is given.
    pub async fn add_items_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[&str],
        position: Option<u64>,
        token: &str,
    ) -> Result<SnapshotId> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;
        validate::ids(uris, "uris", MAX_PLAYLIST_ITEMS_PER_REQUEST)?;

        let mut body = json!({ "uris": uris });
        if let Some(position) = position {
            body["position"] = json!(position);
        }

        let raw = self
            .send(
                Method::Post,
                &format!("playlists/{}/tracks", segment(playlist_id)),
                Some(&body),
                token,
            )
            .await?;
        parse(&raw, SnapshotId::from_json)
    }

    /// `DELETE /playlists/{id}/tracks`, at most 100 uris.
    pub async fn remove_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[&str],
        snapshot_id: Option<&str>,
        token: &str,
    ) -> Result<SnapshotId> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;
        validate::ids(uris, "uris", MAX_PLAYLIST_ITEMS_PER_REQUEST)?;
        if let Some(snapshot_id) = snapshot_id {
            validate::id(snapshot_id, "snapshot_id")?;
        }

        let tracks: Vec<Value> = uris.iter().map(|uri| json!({ "uri": uri })).collect();
        let mut body = json!({ "tracks": tracks });
        if let Some(snapshot_id) = snapshot_id {
            body["snapshot_id"] = json!(snapshot_id);
        }

        let raw = self
            .send(
                Method::Delete,
                &format!("playlists/{}/tracks", segment(playlist_id)),
                Some(&body),
                token,
            )
            .await?;
        parse(&raw, SnapshotId::from_json)
    }

    /// `GET /me/playlists`
    pub async fn get_current_users_playlists(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Playlist>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed("me/playlists", opts, token, |v| {
            Paging::parse(v, Playlist::from_json)
        })
        .await
    }

    /// `GET /users/{id}/playlists`
    pub async fn get_users_playlists(
        &self,
        user_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Playlist>> {
        validate::id(user_id, "user_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("users/{}/playlists", segment(user_id)),
            opts,
            token,
            |v| Paging::parse(v, Playlist::from_json),
        )
        .await
    }

    /// `POST /users/{id}/playlists`; `details.name` is required.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        details: &PlaylistDetails,
        token: &str,
    ) -> Result<Playlist> {
        validate::id(user_id, "user_id")?;
        validate::token(token)?;
        validate::validate_id(&json!(details.name), "name")?;

        let body = details.to_body()?;
        let raw = self
            .send(
                Method::Post,
                &format!("users/{}/playlists", segment(user_id)),
                Some(&body),
                token,
            )
            .await?;
        parse(&raw, Playlist::from_json)
    }

    /// `GET /browse/featured-playlists`
    pub async fn get_featured_playlists(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Playlist>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_enveloped_page(
            "browse/featured-playlists",
            "playlists",
            opts,
            token,
            Playlist::from_json,
        )
        .await
    }

    /// `GET /browse/categories/{id}/playlists`
    pub async fn get_category_playlists(
        &self,
        category_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Playlist>> {
        validate::id(category_id, "category_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_enveloped_page(
            &format!("browse/categories/{}/playlists", segment(category_id)),
            "playlists",
            opts,
            token,
            Playlist::from_json,
        )
        .await
    }

    /// `GET /playlists/{id}/images`
    pub async fn get_playlist_cover_image(
        &self,
        playlist_id: &str,
        token: &str,
    ) -> Result<Vec<Image>> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;

        let path = format!("playlists/{}/images", segment(playlist_id));
        let raw = self.send(Method::Get, &path, None, token).await?;

        let Some(images) = raw.as_array() else {
            return Err(Error::unexpected_response(
                "Expected a list of images",
                &raw,
            ));
        };
        images
            .iter()
            .map(|image| parse(image, Image::from_json))
            .collect()
    }
}
