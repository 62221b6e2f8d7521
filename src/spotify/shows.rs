use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{
    error::Result,
    transport::Transport,
    types::{Episode, Paging, Saved, Show},
    validate,
};

pub const MAX_SEVERAL_SHOWS: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /shows/{id}`
    pub async fn get_show(&self, show_id: &str, token: &str, opts: &QueryOptions) -> Result<Show> {
        validate::id(show_id, "show_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("shows/{}", segment(show_id)),
            opts,
            token,
            Show::from_json,
        )
        .await
    }

    /// `GET /shows?ids=...`, at most 50 ids.
    pub async fn get_several_shows(
        &self,
        show_ids: &[&str],
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Vec<Show>> {
        self.get_several(
            "shows",
            show_ids,
            "show_ids",
            MAX_SEVERAL_SHOWS,
            opts,
            token,
            Show::from_json,
        )
        .await
    }

    /// `GET /shows/{id}/episodes`
    pub async fn get_show_episodes(
        &self,
        show_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Episode>> {
        validate::id(show_id, "show_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("shows/{}/episodes", segment(show_id)),
            opts,
            token,
            |v| Paging::parse(v, Episode::from_json),
        )
        .await
    }

    /// `GET /me/shows`
    pub async fn get_users_saved_shows(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Saved<Show>>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed("me/shows", opts, token, |v| {
            Paging::parse(v, |item| Saved::parse(item, "show", Show::from_json))
        })
        .await
    }

    /// `PUT /me/shows?ids=...`
    pub async fn save_shows_for_user(&self, show_ids: &[&str], token: &str) -> Result<()> {
        self.library_save("shows", show_ids, "show_ids", MAX_SEVERAL_SHOWS, token)
            .await
    }

    /// `DELETE /me/shows?ids=...`
    pub async fn remove_users_saved_shows(&self, show_ids: &[&str], token: &str) -> Result<()> {
        self.library_remove("shows", show_ids, "show_ids", MAX_SEVERAL_SHOWS, token)
            .await
    }

    /// `GET /me/shows/contains?ids=...`
    pub async fn check_users_saved_shows(
        &self,
        show_ids: &[&str],
        token: &str,
    ) -> Result<Vec<bool>> {
        self.library_contains("shows", show_ids, "show_ids", MAX_SEVERAL_SHOWS, token)
            .await
    }
}
