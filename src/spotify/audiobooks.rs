use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{
    error::Result,
    transport::Transport,
    types::{Audiobook, Chapter, Paging},
    validate,
};

pub const MAX_SEVERAL_AUDIOBOOKS: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /audiobooks/{id}`
    pub async fn get_audiobook(
        &self,
        audiobook_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Audiobook> {
        validate::id(audiobook_id, "audiobook_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("audiobooks/{}", segment(audiobook_id)),
            opts,
            token,
            Audiobook::from_json,
        )
        .await
    }

    /// `GET /audiobooks?ids=...`, at most 50 ids.
    pub async fn get_several_audiobooks(
        &self,
        audiobook_ids: &[&str],
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Vec<Audiobook>> {
        self.get_several(
            "audiobooks",
            audiobook_ids,
            "audiobook_ids",
            MAX_SEVERAL_AUDIOBOOKS,
            opts,
            token,
            Audiobook::from_json,
        )
        .await
    }

    /// `GET /audiobooks/{id}/chapters`
    pub async fn get_audiobook_chapters(
        &self,
        audiobook_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Chapter>> {
        validate::id(audiobook_id, "audiobook_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("audiobooks/{}/chapters", segment(audiobook_id)),
            opts,
            token,
            |v| Paging::parse(v, Chapter::from_json),
        )
        .await
    }

    /// `GET /me/audiobooks`. Unlike the other libraries the items are the
    /// audiobooks themselves, without an `added_at` wrapper.
    pub async fn get_users_saved_audiobooks(
        &self,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Audiobook>> {
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed("me/audiobooks", opts, token, |v| {
            Paging::parse(v, Audiobook::from_json)
        })
        .await
    }

    /// `PUT /me/audiobooks?ids=...`
    pub async fn save_audiobooks_for_user(
        &self,
        audiobook_ids: &[&str],
        token: &str,
    ) -> Result<()> {
        self.library_save(
            "audiobooks",
            audiobook_ids,
            "audiobook_ids",
            MAX_SEVERAL_AUDIOBOOKS,
            token,
        )
        .await
    }

    /// `DELETE /me/audiobooks?ids=...`
    pub async fn remove_users_saved_audiobooks(
        &self,
        audiobook_ids: &[&str],
        token: &str,
    ) -> Result<()> {
        self.library_remove(
            "audiobooks",
            audiobook_ids,
            "audiobook_ids",
            MAX_SEVERAL_AUDIOBOOKS,
            token,
        )
        .await
    }

    /// `GET /me/audiobooks/contains?ids=...`
    pub async fn check_users_saved_audiobooks(
        &self,
        audiobook_ids: &[&str],
        token: &str,
    ) -> Result<Vec<bool>> {
        self.library_contains(
            "audiobooks",
            audiobook_ids,
            "audiobook_ids",
            MAX_SEVERAL_AUDIOBOOKS,
            token,
        )
        .await
    }
}
