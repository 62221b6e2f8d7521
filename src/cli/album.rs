use tabled::Table;

use super::{report, session, spinner, table::TrackRow};
use crate::{info, spotify::QueryOptions};

pub async fn album(album_id: String, market: Option<String>) {
    let session = session().await;
    let Some(token) = session.token().await else {
        return;
    };

    let mut opts = QueryOptions::new();
    if let Some(market) = market {
        opts = opts.market(market);
    }

    let pb = spinner("Fetching album...");
    let result = session.client.get_album(&album_id, &token, &opts).await;
    pb.finish_and_clear();

    let album = match result {
        Ok(album) => album,
        Err(e) => return report(&e),
    };

    let artists = album
        .artists
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    info!(
        "{} by {} ({})",
        album.name,
        artists,
        album.release_date.as_deref().unwrap_or("unknown date")
    );

    let rows: Vec<TrackRow> = album
        .tracks
        .as_ref()
        .map(|page| page.items.iter().map(TrackRow::from_track).collect())
        .unwrap_or_default();
    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }
}
