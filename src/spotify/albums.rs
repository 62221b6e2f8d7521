use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{
    error::Result,
    transport::Transport,
    types::{Album, Paging, Saved, Track},
    validate,
};

pub const MAX_SEVERAL_ALBUMS: usize = 20;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /albums/{id}`
    pub async fn get_album(
        &self,
        album_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Album> {
        validate::id(album_id, "album_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("albums/{}", segment(album_id)),
            opts,
            token,
            Album::from_json,
        )
        .await
    }

    /// `GET /albums?ids=...`, at most 20 ids.
    pub async fn get_several_albums(
        &self,
        album_ids: &[&str],
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Vec<Album>> {
        self.get_several(
            "albums",
            album_ids,
            "album_ids",
            MAX_SEVERAL_ALBUMS,
            opts,
            token,
            Album::from_json,
        )
        .await
    }

    /// `GET /albums/{id}/tracks`
    pub async fn get_album_tracks(
        &self,
        album_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Track>> {
        validate::id(album_id, "album_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("albums/{}/tracks", segment(album_id)),
            opts,
            token,
            |v| Paging::parse(v, Track::from_json),
        )
        .await
    }

    /// `GET /me/albums`
    pub async fn get_users_saved_albums(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Saved<Album>>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed("me/albums", opts, token, |v| {
            Paging::parse(v, |item| Saved::parse(item, "album", Album::from_json))
        })
        .await
    }

    /// `PUT /me/albums?ids=...`
    pub async fn save_albums_for_user(&self, album_ids: &[&str], token: &str) -> Result<()> {
        self.library_save("albums", album_ids, "album_ids", MAX_SEVERAL_ALBUMS, token)
            .await
    }

    /// `DELETE /me/albums?ids=...`
    pub async fn remove_users_saved_albums(&self, album_ids: &[&str], token: &str) -> Result<()> {
        self.library_remove("albums", album_ids, "album_ids", MAX_SEVERAL_ALBUMS, token)
            .await
    }

    /// `GET /me/albums/contains?ids=...`
    pub async fn check_users_saved_albums(
        &self,
        album_ids: &[&str],
        token: &str,
    ) -> Result<Vec<bool>> {
        self.library_contains("albums", album_ids, "album_ids", MAX_SEVERAL_ALBUMS, token)
            .await
    }

    /// `GET /browse/new-releases`
    pub async fn get_new_releases(&self, token: &str, opts: &QueryOptions) -> Result<Paging<Album>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_enveloped_page("browse/new-releases", "albums", opts, token, Album::from_json)
            .await
    }
}
