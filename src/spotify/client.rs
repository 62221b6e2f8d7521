use serde_json::Value;
use tracing::debug;

use super::query::{QueryOptions, with_query};
use crate::{
    config,
    error::{Error, Result},
    transport::{HttpTransport, Method, Transport},
    types::{Paging, ParseError},
    validate,
};

/// Entry point to the Web API.
///
/// Every operation follows the same sequence: validate all arguments (no
/// request is sent if one is invalid), send exactly one request through the
/// [`Transport`], check the response envelope and parse it into typed
/// records. Errors from the transport are returned unchanged.
///
/// Operations are implemented per resource in the sibling modules as
/// `impl SpotifyClient` blocks.
pub struct SpotifyClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl SpotifyClient<HttpTransport> {
    /// Creates a client talking to the configured API URL.
    pub fn from_config() -> Result<Self> {
        Ok(Self::new(HttpTransport::from_config()?))
    }
}

impl<T: Transport> SpotifyClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: config::spotify_apiurl(),
        }
    }

    /// Base URL stripped from `next`/`previous` links before they are
    /// handed to the transport.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<Value> {
        debug!(%method, path, "calling transport");
        self.transport.fetch(method, path, body, token).await
    }

    /// `GET path` with `opts` appended, parsed as a whole with `parser`.
    ///
    /// Anything but a JSON object (including the `null` of an empty body)
    /// is an `unexpected_response`.
    pub(crate) async fn get_parsed<R>(
        &self,
        path: &str,
        opts: &QueryOptions,
        token: &str,
        parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
    ) -> Result<R> {
        let raw = self
            .send(Method::Get, &with_query(path, &opts.pairs()), None, token)
            .await?;
        if !raw.is_object() {
            return Err(Error::unexpected_response("Expected an object", &raw));
        }
        parse(&raw, parser)
    }

    /// `GET path` returning `{"<key>": {...page...}}`.
    pub(crate) async fn get_enveloped_page<R>(
        &self,
        path: &str,
        key: &str,
        opts: &QueryOptions,
        token: &str,
        parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
    ) -> Result<Paging<R>> {
        let raw = self
            .send(Method::Get, &with_query(path, &opts.pairs()), None, token)
            .await?;
        let page = envelope_object(&raw, key)?;
        parse(page, |v| Paging::parse(v, &parser))
    }

    /// `GET <collection>?ids=...` returning `{"<collection>": [...]}`.
    ///
    /// Unknown ids come back as `null` entries and are skipped.
    pub(crate) async fn get_several<R>(
        &self,
        collection: &str,
        ids: &[&str],
        field: &str,
        max: usize,
        opts: &QueryOptions,
        token: &str,
        parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
    ) -> Result<Vec<R>> {
        validate::token(token)?;
        validate::ids(ids, field, max)?;
        opts.validate()?;

        let mut params = vec![("ids", ids.join(","))];
        params.extend(opts.pairs());
        let raw = self
            .send(Method::Get, &with_query(collection, &params), None, token)
            .await?;

        envelope_array(&raw, collection)?
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| parse(item, &parser))
            .collect()
    }

    /// `PUT me/<collection>?ids=...`
    pub(crate) async fn library_save(
        &self,
        collection: &str,
        ids: &[&str],
        field: &str,
        max: usize,
        token: &str,
    ) -> Result<()> {
        self.library_change(Method::Put, collection, ids, field, max, token)
            .await
    }

    /// `DELETE me/<collection>?ids=...`
    pub(crate) async fn library_remove(
        &self,
        collection: &str,
        ids: &[&str],
        field: &str,
        max: usize,
        token: &str,
    ) -> Result<()> {
        self.library_change(Method::Delete, collection, ids, field, max, token)
            .await
    }

    async fn library_change(
        &self,
        method: Method,
        collection: &str,
        ids: &[&str],
        field: &str,
        max: usize,
        token: &str,
    ) -> Result<()> {
        validate::token(token)?;
        validate::ids(ids, field, max)?;

        let path = with_query(&format!("me/{}", collection), &[("ids", ids.join(","))]);
        self.send(method, &path, None, token).await?;
        Ok(())
    }

    /// `GET me/<collection>/contains?ids=...` returning one flag per id.
    pub(crate) async fn library_contains(
        &self,
        collection: &str,
        ids: &[&str],
        field: &str,
        max: usize,
        token: &str,
    ) -> Result<Vec<bool>> {
        validate::token(token)?;
        validate::ids(ids, field, max)?;

        let path = with_query(
            &format!("me/{}/contains", collection),
            &[("ids", ids.join(","))],
        );
        let raw = self.send(Method::Get, &path, None, token).await?;
        flags(&raw)
    }

    /// Fetches the page following `page`, `None` when it is the last one.
    pub async fn next_page<R>(
        &self,
        page: &Paging<R>,
        token: &str,
        parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
    ) -> Result<Option<Paging<R>>> {
        validate::token(token)?;
        match &page.next {
            Some(url) => self.follow(url, token, parser).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetches the page preceding `page`, `None` when it is the first one.
    pub async fn previous_page<R>(
        &self,
        page: &Paging<R>,
        token: &str,
        parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
    ) -> Result<Option<Paging<R>>> {
        validate::token(token)?;
        match &page.previous {
            Some(url) => self.follow(url, token, parser).await.map(Some),
            None => Ok(None),
        }
    }

    async fn follow<R>(
        &self,
        url: &str,
        token: &str,
        parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
    ) -> Result<Paging<R>> {
        let path = self.relative_path(url);
        let raw = self.send(Method::Get, path, None, token).await?;

        // search pages come wrapped in their envelope, e.g. {"tracks": {...}}
        let page = match raw.as_object() {
            Some(obj) if !obj.contains_key("items") && obj.len() == 1 => {
                obj.values().next().unwrap_or(&raw)
            }
            _ => &raw,
        };
        if !page.get("items").is_some_and(Value::is_array) {
            return Err(Error::unexpected_response(
                "Expected a page with an items list",
                &raw,
            ));
        }
        parse(page, |v| Paging::parse(v, &parser))
    }

    fn relative_path<'a>(&self, url: &'a str) -> &'a str {
        let base = self.base_url.trim_end_matches('/');
        url.strip_prefix(base)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(url)
    }
}

/// Runs `parser` on `raw`, turning a [`ParseError`] into an
/// `unexpected_response` error that carries the raw response.
pub(crate) fn parse<R>(
    raw: &Value,
    parser: impl Fn(&Value) -> std::result::Result<R, ParseError>,
) -> Result<R> {
    parser(raw).map_err(|e| Error::from(e).with_detail("response", raw.clone()))
}

/// Returns the object under `key`.
pub(crate) fn envelope_object<'a>(raw: &'a Value, key: &str) -> Result<&'a Value> {
    raw.get(key).filter(|v| v.is_object()).ok_or_else(|| {
        Error::unexpected_response(format!("Expected an object under `{}`", key), raw)
            .with_detail("expected_key", key)
    })
}

/// Returns the array under `key`.
pub(crate) fn envelope_array<'a>(raw: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
    raw.get(key).and_then(Value::as_array).ok_or_else(|| {
        Error::unexpected_response(format!("Expected a list under `{}`", key), raw)
            .with_detail("expected_key", key)
    })
}

/// Reads a bare JSON array of booleans, as returned by `contains` endpoints.
pub(crate) fn flags(raw: &Value) -> Result<Vec<bool>> {
    raw.as_array()
        .and_then(|items| items.iter().map(Value::as_bool).collect::<Option<Vec<_>>>())
        .ok_or_else(|| Error::unexpected_response("Expected a list of booleans", raw))
}

/// Path segment for a validated id.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
