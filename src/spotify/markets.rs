use super::{SpotifyClient, client::envelope_array};
use crate::{
    error::{Error, Result},
    transport::{Method, Transport},
    validate,
};

impl<T: Transport> SpotifyClient<T> {
    /// `GET /markets`; ISO 3166-1 alpha-2 country codes.
    pub async fn get_available_markets(&self, token: &str) -> Result<Vec<String>> {
        validate::token(token)?;

        let raw = self.send(Method::Get, "markets", None, token).await?;
        envelope_array(&raw, "markets")?
            .iter()
            .map(|market| {
                market
                    .as_str()
                    .map(String::from)
                    .ok_or_else(|| Error::unexpected_response("Expected market codes", &raw))
            })
            .collect()
    }
}
