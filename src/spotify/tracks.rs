use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{
    error::Result,
    transport::Transport,
    types::{Paging, Saved, Track},
    validate,
};

pub const MAX_SEVERAL_TRACKS: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /tracks/{id}`
    pub async fn get_track(
        &self,
        track_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Track> {
        validate::id(track_id, "track_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("tracks/{}", segment(track_id)),
            opts,
            token,
            Track::from_json,
        )
        .await
    }

    /// `GET /tracks?ids=...`, at most 50 ids.
    pub async fn get_several_tracks(
        &self,
        track_ids: &[&str],
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Vec<Track>> {
        self.get_several(
            "tracks",
            track_ids,
            "track_ids",
            MAX_SEVERAL_TRACKS,
            opts,
            token,
            Track::from_json,
        )
        .await
    }

    /// `GET /me/tracks`
    pub async fn get_users_saved_tracks(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Saved<Track>>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed("me/tracks", opts, token, |v| {
            Paging::parse(v, |item| Saved::parse(item, "track", Track::from_json))
        })
        .await
    }

    /// `PUT /me/tracks?ids=...`
    pub async fn save_tracks_for_user(&self, track_ids: &[&str], token: &str) -> Result<()> {
        self.library_save("tracks", track_ids, "track_ids", MAX_SEVERAL_TRACKS, token)
            .await
    }

    /// `DELETE /me/tracks?ids=...`
    pub async fn remove_users_saved_tracks(&self, track_ids: &[&str], token: &str) -> Result<()> {
        self.library_remove("tracks", track_ids, "track_ids", MAX_SEVERAL_TRACKS, token)
            .await
    }

    /// `GET /me/tracks/contains?ids=...`
    pub async fn check_users_saved_tracks(
        &self,
        track_ids: &[&str],
        token: &str,
    ) -> Result<Vec<bool>> {
        self.library_contains("tracks", track_ids, "track_ids", MAX_SEVERAL_TRACKS, token)
            .await
    }
}
