use super::{
    QueryOptions, SpotifyClient,
    client::{envelope_array, parse, segment},
    query::with_query,
};
use crate::{
    error::Result,
    transport::{Method, Transport},
    types::{Album, Artist, Paging, Track},
    validate,
};

pub const MAX_SEVERAL_ARTISTS: usize = 50;

impl<T: Transport> SpotifyClient<T> {
    /// `GET /artists/{id}`
    pub async fn get_artist(&self, artist_id: &str, token: &str) -> Result<Artist> {
        validate::id(artist_id, "artist_id")?;
        validate::token(token)?;

        self.get_parsed(
            &format!("artists/{}", segment(artist_id)),
            &QueryOptions::default(),
            token,
            Artist::from_json,
        )
        .await
    }

    /// `GET /artists?ids=...`, at most 50 ids.
    pub async fn get_several_artists(
        &self,
        artist_ids: &[&str],
        token: &str,
    ) -> Result<Vec<Artist>> {
        self.get_several(
            "artists",
            artist_ids,
            "artist_ids",
            MAX_SEVERAL_ARTISTS,
            &QueryOptions::default(),
            token,
            Artist::from_json,
        )
        .await
    }

    /// `GET /artists/{id}/albums`; `include_groups` narrows the release
    /// types (album, single, appears_on, compilation).
    pub async fn get_artists_albums(
        &self,
        artist_id: &str,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<Paging<Album>> {
        validate::id(artist_id, "artist_id")?;
        validate::token(token)?;
        opts.validate()?;

        self.get_parsed(
            &format!("artists/{}/albums", segment(artist_id)),
            opts,
            token,
            |v| Paging::parse(v, Album::from_json),
        )
        .await
    }

    /// `GET /artists/{id}/top-tracks?market=...`
    pub async fn get_artists_top_tracks(
        &self,
        artist_id: &str,
        market: &str,
        token: &str,
    ) -> Result<Vec<Track>> {
        validate::id(artist_id, "artist_id")?;
        validate::token(token)?;
        validate::id(market, "market")?;

        let path = with_query(
            &format!("artists/{}/top-tracks", segment(artist_id)),
            &[("market", market.to_string())],
        );
        let raw = self.send(Method::Get, &path, None, token).await?;

        envelope_array(&raw, "tracks")?
            .iter()
            .map(|item| parse(item, Track::from_json))
            .collect()
    }

    /// `GET /artists/{id}/related-artists`
    pub async fn get_artists_related_artists(
        &self,
        artist_id: &str,
        token: &str,
    ) -> Result<Vec<Artist>> {
        validate::id(artist_id, "artist_id")?;
        validate::token(token)?;

        let path = format!("artists/{}/related-artists", segment(artist_id));
        let raw = self.send(Method::Get, &path, None, token).await?;

        envelope_array(&raw, "artists")?
            .iter()
            .map(|item| parse(item, Artist::from_json))
            .collect()
    }
}
