use serde_json::json;

use super::{
    QueryOptions, SpotifyClient,
    client::{envelope_object, flags, parse, segment},
    query::with_query,
};
use crate::{
    error::{Error, Result},
    transport::{Method, Transport},
    types::{Artist, CursorPaging, Paging, ParseError, SearchItem, User},
    validate,
};

pub const TOP_ITEM_TYPES: [&str; 2] = ["artists", "tracks"];
pub const FOLLOW_TYPES: [&str; 2] = ["artist", "user"];
pub const MAX_FOLLOW_IDS: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /me`
    pub async fn get_current_users_profile(&self, token: &str) -> Result<User> {
        validate::token(token)?;

        self.get_parsed("me", &QueryOptions::default(), token, User::from_json)
            .await
    }

    /// `GET /me/top/{type}` where `kind` is `artists` or `tracks`.
    pub async fn get_users_top_items(
        &self,
        kind: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<SearchItem>> {
        validate::token(token)?;
        validate::validate_one_of(kind, "type", &TOP_ITEM_TYPES)?;
        opts.validate()?;

        self.get_parsed(&format!("me/top/{}", kind), opts, token, |v| {
            Paging::parse(v, |item| {
                SearchItem::parse(kind, item).unwrap_or(Err(ParseError::InvalidField {
                    entity: "TopItem",
                    field: "type",
                }))
            })
        })
        .await
    }

    /// `GET /users/{id}`
    pub async fn get_users_profile(&self, user_id: &str, token: &str) -> Result<User> {
        validate::id(user_id, "user_id")?;
        validate::token(token)?;

        self.get_parsed(
            &format!("users/{}", segment(user_id)),
            &QueryOptions::default(),
            token,
            User::from_json,
        )
        .await
    }

    /// `PUT /playlists/{id}/followers`
    pub async fn follow_playlist(
        &self,
        playlist_id: &str,
        public: Option<bool>,
        token: &str,
    ) -> Result<()> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;

        let body = public.map(|public| json!({ "public": public }));
        self.send(
            Method::Put,
            &format!("playlists/{}/followers", segment(playlist_id)),
            body.as_ref(),
            token,
        )
        .await?;
        Ok(())
    }

    /// `DELETE /playlists/{id}/followers`
    pub async fn unfollow_playlist(&self, playlist_id: &str, token: &str) -> Result<()> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;

        self.send(
            Method::Delete,
            &format!("playlists/{}/followers", segment(playlist_id)),
            None,
            token,
        )
        .await?;
        Ok(())
    }

    /// `GET /me/following?type=artist`, paged by the `after` cursor.
    pub async fn get_followed_artists(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<CursorPaging<Artist>> {
        validate::token(token)?;
        opts.validate()?;

        let mut params = vec![("type", "artist".to_string())];
        params.extend(opts.pairs());
        let raw = self
            .send(Method::Get, &with_query("me/following", &params), None, token)
            .await?;
        let page = envelope_object(&raw, "artists")?;
        parse(page, |v| CursorPaging::parse(v, Artist::from_json))
    }

    /// `PUT /me/following?type=...&ids=...`
    pub async fn follow_artists_or_users(
        &self,
        kind: &str,
        ids: &[&str],
        token: &str,
    ) -> Result<()> {
        self.change_following(Method::Put, kind, ids, token).await
    }

    /// `DELETE /me/following?type=...&ids=...`
    pub async fn unfollow_artists_or_users(
        &self,
        kind: &str,
        ids: &[&str],
        token: &str,
    ) -> Result<()> {
        self.change_following(Method::Delete, kind, ids, token)
            .await
    }

    /// `GET /me/following/contains?type=...&ids=...`
    pub async fn check_if_user_follows_artists_or_users(
        &self,
        kind: &str,
        ids: &[&str],
        token: &str,
    ) -> Result<Vec<bool>> {
        validate::token(token)?;
        validate::ids(ids, "ids", MAX_FOLLOW_IDS)?;
        validate::validate_one_of(kind, "type", &FOLLOW_TYPES)?;

        let path = with_query(
            "me/following/contains",
            &[("type", kind.to_string()), ("ids", ids.join(","))],
        );
        let raw = self.send(Method::Get, &path, None, token).await?;
        flags(&raw)
    }

    /// `GET /playlists/{id}/followers/contains`; whether the current user
    /// follows the playlist.
    pub async fn check_if_users_follow_playlist(
        &self,
        playlist_id: &str,
        token: &str,
    ) -> Result<bool> {
        validate::id(playlist_id, "playlist_id")?;
        validate::token(token)?;

        let raw = self
            .send(
                Method::Get,
                &format!("playlists/{}/followers/contains", segment(playlist_id)),
                None,
                token,
            )
            .await?;
        flags(&raw)?
            .first()
            .copied()
            .ok_or_else(|| Error::unexpected_response("Expected one boolean", &raw))
    }

    async fn change_following(
        &self,
        method: Method,
        kind: &str,
        ids: &[&str],
        token: &str,
    ) -> Result<()> {
        validate::token(token)?;
        validate::ids(ids, "ids", MAX_FOLLOW_IDS)?;
        validate::validate_one_of(kind, "type", &FOLLOW_TYPES)?;

        let path = with_query(
            "me/following",
            &[("type", kind.to_string()), ("ids", ids.join(","))],
        );
        self.send(method, &path, None, token).await?;
        Ok(())
    }
}
