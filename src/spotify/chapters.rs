use super::{QueryOptions, SpotifyClient, client::segment};
use crate::{error::Result, transport::Transport, types::Chapter, validate};

pub const MAX_SEVERAL_CHAPTERS: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /chapters/{id}`
    pub async fn get_chapter(
        &self,
        chapter_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Chapter> {
        validate::id(chapter_id, "chapter_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("chapters/{}", segment(chapter_id)),
            opts,
            token,
            Chapter::from_json,
        )
        .await
    }

    /// `GET /chapters?ids=...`, at most 50 ids.
    pub async fn get_several_chapters(
        &self,
        chapter_ids: &[&str],
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Vec<Chapter>> {
        self.get_several(
            "chapters",
            chapter_ids,
            "chapter_ids",
            MAX_SEVERAL_CHAPTERS,
            opts,
            token,
            Chapter::from_json,
        )
        .await
    }
}
