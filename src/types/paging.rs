use serde::Serialize;
use serde_json::Value;

use super::{ParseError, count, opt_object, text};

/// An offset-based page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paging<T> {
    pub href: Option<String>,
    pub limit: u64,
    pub next: Option<String>,
    pub offset: u64,
    pub previous: Option<String>,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Paging<T> {
    /// Builds a page, running every element of `items` through `parser`.
    ///
    /// A null or missing `items` yields an empty page. The first element that
    /// fails to parse fails the page.
    pub fn parse<F>(value: &Value, parser: F) -> Result<Self, ParseError>
    where
        F: Fn(&Value) -> Result<T, ParseError>,
    {
        Ok(Paging {
            href: text(value, "href"),
            limit: count(value, "limit").unwrap_or_default(),
            next: text(value, "next"),
            offset: count(value, "offset").unwrap_or_default(),
            previous: text(value, "previous"),
            total: count(value, "total").unwrap_or_default(),
            items: parse_items(value, parser)?,
        })
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paging<U> {
        Paging {
            href: self.href,
            limit: self.limit,
            next: self.next,
            offset: self.offset,
            previous: self.previous,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl Paging<Value> {
    /// Builds a page keeping the raw item values.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Self::parse(value, |item| Ok(item.clone()))
    }
}

/// Cursor based page, used for followed artists and recently played tracks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursorPaging<T> {
    pub href: Option<String>,
    pub limit: u64,
    pub next: Option<String>,
    pub cursors: Option<Cursors>,
    pub total: Option<u64>,
    pub items: Vec<T>,
}

impl<T> CursorPaging<T> {
    pub fn parse<F>(value: &Value, parser: F) -> Result<Self, ParseError>
    where
        F: Fn(&Value) -> Result<T, ParseError>,
    {
        Ok(CursorPaging {
            href: text(value, "href"),
            limit: count(value, "limit").unwrap_or_default(),
            next: text(value, "next"),
            cursors: opt_object(value, "cursors", Cursors::from_json),
            total: count(value, "total"),
            items: parse_items(value, parser)?,
        })
    }

    /// Cursor to pass as `after` to fetch the next page.
    pub fn after(&self) -> Option<&str> {
        self.cursors.as_ref().and_then(|c| c.after.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cursors {
    pub after: Option<String>,
    pub before: Option<String>,
}

impl Cursors {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Cursors {
            after: text(value, "after"),
            before: text(value, "before"),
        })
    }
}

/// An item of the user's library together with the time it was saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Saved<T> {
    pub added_at: Option<String>,
    pub item: T,
}

impl<T> Saved<T> {
    /// Parses `{"added_at": ..., "<key>": {...}}`.
    pub fn parse<F>(value: &Value, key: &str, parser: F) -> Result<Self, ParseError>
    where
        F: Fn(&Value) -> Result<T, ParseError>,
    {
        Ok(Saved {
            added_at: text(value, "added_at"),
            item: parser(value.get(key).unwrap_or(&Value::Null))?,
        })
    }
}

fn parse_items<T, F>(value: &Value, parser: F) -> Result<Vec<T>, ParseError>
where
    F: Fn(&Value) -> Result<T, ParseError>,
{
    match value.get("items").and_then(Value::as_array) {
        Some(items) => items.iter().map(parser).collect(),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{Album, Track};

    #[test]
    fn null_items_become_empty() {
        let page =
            Paging::from_json(&json!({ "limit": 20, "offset": 0, "total": 0, "items": null }))
                .unwrap();
        assert_eq!(page.limit, 20);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn identity_parser_keeps_raw_items() {
        let page = Paging::from_json(&json!({ "items": [1, "two", null] })).unwrap();
        assert_eq!(page.items, vec![json!(1), json!("two"), Value::Null]);
    }

    #[test]
    fn parser_maps_every_element() {
        let page = Paging::parse(
            &json!({
                "href": "https://api.spotify.com/v1/me/tracks?offset=0&limit=2",
                "limit": 2,
                "offset": 0,
                "total": 10,
                "next": "https://api.spotify.com/v1/me/tracks?offset=2&limit=2",
                "previous": null,
                "items": [{ "name": "a" }, { "name": "b" }]
            }),
            Track::from_json,
        )
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].name, "b");
        assert!(page.has_next());
        assert!(!page.has_previous());

        let names = page.map(|t| t.name);
        assert_eq!(names.items, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn strict_items_fail_the_page() {
        let result = Paging::parse(&json!({ "items": [{ "name": "x" }] }), Album::from_json);
        assert!(result.is_err());
    }

    #[test]
    fn cursor_paging_exposes_after() {
        let page = CursorPaging::parse(
            &json!({ "limit": 1, "cursors": { "after": "0I2XqVXqHScXjHhk6AYYRe" }, "total": 5, "items": [] }),
            Track::from_json,
        )
        .unwrap();
        assert_eq!(page.after(), Some("0I2XqVXqHScXjHhk6AYYRe"));
        assert_eq!(page.total, Some(5));
    }

    #[test]
    fn saved_reads_item_under_key() {
        let saved = Saved::parse(
            &json!({ "added_at": "2024-05-01T10:00:00Z", "track": { "name": "Reckoner" } }),
            "track",
            Track::from_json,
        )
        .unwrap();
        assert_eq!(saved.added_at.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(saved.item.name, "Reckoner");
    }
}
