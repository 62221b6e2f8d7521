use std::collections::HashMap;

use serde_json::{Value, json};

use super::{QueryOptions, SpotifyClient, client::parse, query::with_query};
use crate::{
    error::{Error, Result},
    transport::{Method, Transport},
    types::{Paging, SEARCH_TYPES, SearchItem},
    validate,
};

/// Item types to search for, from a comma separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTypes(Vec<String>);

impl SearchTypes {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    fn validate(&self) -> Result<()> {
        validate::validate_list(&json!(self.0), "types")?;
        for kind in &self.0 {
            validate::validate_one_of(kind, "types", &SEARCH_TYPES)?;
        }
        Ok(())
    }
}

impl From<&str> for SearchTypes {
    fn from(types: &str) -> Self {
        SearchTypes(
            types
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

impl From<&[&str]> for SearchTypes {
    fn from(types: &[&str]) -> Self {
        SearchTypes(types.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SearchTypes {
    fn from(types: [&str; N]) -> Self {
        SearchTypes(types.iter().map(|t| t.to_string()).collect())
    }
}

impl From<Vec<String>> for SearchTypes {
    fn from(types: Vec<String>) -> Self {
        SearchTypes(types)
    }
}

impl<T: Transport> SpotifyClient<T> {
    /// `GET /search?q=...&type=...`
    ///
    /// Returns one page per result envelope present in the response, keyed
    /// by the envelope name (`"albums"`, `"tracks"`, ...).
    pub async fn search(
        &self,
        query: &str,
        types: impl Into<SearchTypes>,
        token: &str,
        opts: &QueryOptions,
    ) -> Result<HashMap<String, Paging<SearchItem>>> {
        let types = types.into();
        validate::id(query, "query")?;
        validate::token(token)?;
        types.validate()?;
        opts.validate()?;

        let mut params = vec![
            ("q", query.to_string()),
            ("type", types.as_slice().join(",")),
        ];
        params.extend(opts.pairs());
        let raw = self
            .send(Method::Get, &with_query("search", &params), None, token)
            .await?;

        let Some(envelopes) = raw.as_object() else {
            return Err(Error::unexpected_response(
                "Expected an object of search results",
                &raw,
            ));
        };

        let mut results = HashMap::new();
        for (key, page) in envelopes {
            if !SearchItem::is_envelope(key) || !page.is_object() {
                continue;
            }
            results.insert(key.clone(), parse_page(key, page)?);
        }
        Ok(results)
    }
}

// Result pages may hold null entries; they are dropped.
fn parse_page(key: &str, page: &Value) -> Result<Paging<SearchItem>> {
    let Paging {
        href,
        limit,
        next,
        offset,
        previous,
        total,
        items,
    } = parse(page, |v| {
        Paging::parse(v, |item| match item {
            Value::Null => Ok(None),
            _ => SearchItem::parse(key, item).transpose(),
        })
    })?;

    Ok(Paging {
        href,
        limit,
        next,
        offset,
        previous,
        total,
        items: items.into_iter().flatten().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_from_string_and_list() {
        assert_eq!(
            SearchTypes::from("album, track").as_slice(),
            &["album".to_string(), "track".to_string()]
        );
        assert_eq!(SearchTypes::from(["show"]).as_slice(), &["show".to_string()]);
        assert!(SearchTypes::from("").validate().is_err());
        assert!(SearchTypes::from("album,podcast").validate().is_err());
        assert!(SearchTypes::from(SEARCH_TYPES).validate().is_ok());
    }
}
