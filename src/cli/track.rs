use super::{report, session, spinner, table::format_duration};
use crate::{info, spotify::QueryOptions};

pub async fn track(track_id: String) {
    let session = session().await;
    let Some(token) = session.token().await else {
        return;
    };

    let pb = spinner("Fetching track...");
    let result = session
        .client
        .get_track(&track_id, &token, &QueryOptions::new())
        .await;
    pb.finish_and_clear();

    match result {
        Ok(track) => info!(
            "{} by {} on {} [{}]",
            track.name,
            track.artist_names(),
            track
                .album
                .as_ref()
                .map(|a| a.name.as_str())
                .unwrap_or("-"),
            track.duration_ms.map(format_duration).unwrap_or_default()
        ),
        Err(e) => report(&e),
    }
}
