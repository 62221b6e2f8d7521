use tabled::Table;

use super::{report, session, spinner, table::TrackRow};
use crate::info;

pub async fn artist(artist_id: String, market: String) {
    let session = session().await;
    let Some(token) = session.token().await else {
        return;
    };

    let pb = spinner("Fetching artist...");
    let result = tokio::try_join!(
        session.client.get_artist(&artist_id, &token),
        session
            .client
            .get_artists_top_tracks(&artist_id, &market, &token),
    );
    pb.finish_and_clear();

    let (artist, top_tracks) = match result {
        Ok(found) => found,
        Err(e) => return report(&e),
    };

    let genres = artist.genres.as_deref().unwrap_or_default().join(", ");
    info!(
        "{} - {} followers{}",
        artist.name,
        artist
            .followers
            .as_ref()
            .and_then(|f| f.total)
            .unwrap_or_default(),
        if genres.is_empty() {
            String::new()
        } else {
            format!(" - {}", genres)
        }
    );

    let rows: Vec<TrackRow> = top_tracks.iter().map(TrackRow::from_track).collect();
    println!("{}", Table::new(rows));
}
