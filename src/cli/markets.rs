use super::{report, session, spinner};
use crate::info;

pub async fn markets() {
    let session = session().await;
    let Some(token) = session.token().await else {
        return;
    };

    let pb = spinner("Fetching markets...");
    let result = session.client.get_available_markets(&token).await;
    pb.finish_and_clear();

    match result {
        Ok(markets) => info!("{} markets: {}", markets.len(), markets.join(" ")),
        Err(e) => report(&e),
    }
}
