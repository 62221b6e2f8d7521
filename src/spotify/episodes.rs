use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{
    error::Result,
    transport::Transport,
    types::{Episode, Paging, Saved},
    validate,
};

pub const MAX_SEVERAL_EPISODES: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /episodes/{id}`
    pub async fn get_episode(
        &self,
        episode_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Episode> {
        validate::id(episode_id, "episode_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("episodes/{}", segment(episode_id)),
            opts,
            token,
            Episode::from_json,
        )
        .await
    }

    /// `GET /episodes?ids=...`, at most 50 ids.
    pub async fn get_several_episodes(
        &self,
        episode_ids: &[&str],
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Vec<Episode>> {
        self.get_several(
            "episodes",
            episode_ids,
            "episode_ids",
            MAX_SEVERAL_EPISODES,
            opts,
            token,
            Episode::from_json,
        )
        .await
    }

    /// `GET /me/episodes`
    pub async fn get_users_saved_episodes(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Saved<Episode>>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed("me/episodes", opts, token, |v| {
            Paging::parse(v, |item| Saved::parse(item, "episode", Episode::from_json))
        })
        .await
    }

    /// `PUT /me/episodes?ids=...`
    pub async fn save_episodes_for_user(&self, episode_ids: &[&str], token: &str) -> Result<()> {
        self.library_save(
            "episodes",
            episode_ids,
            "episode_ids",
            MAX_SEVERAL_EPISODES,
            token,
        )
        .await
    }

    /// `DELETE /me/episodes?ids=...`
    pub async fn remove_users_saved_episodes(
        &self,
        episode_ids: &[&str],
        token: &str,
    ) -> Result<()> {
        self.library_remove(
            "episodes",
            episode_ids,
            "episode_ids",
            MAX_SEVERAL_EPISODES,
            token,
        )
        .await
    }

    /// `GET /me/episodes/contains?ids=...`
    pub async fn check_users_saved_episodes(
        &self,
        episode_ids: &[&str],
        token: &str,
    ) -> Result<Vec<bool>> {
        self.library_contains(
            "episodes",
            episode_ids,
            "episode_ids",
            MAX_SEVERAL_EPISODES,
            token,
        )
        .await
    }
}
