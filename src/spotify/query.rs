use crate::{error::Result, validate};

/// Optional query parameters shared by the Web API endpoints.
///
/// Only the parameters an endpoint understands should be set; the client
/// forwards everything that is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub market: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub country: Option<String>,
    pub locale: Option<String>,
    pub time_range: Option<String>,
    pub include_groups: Option<String>,
    pub include_external: Option<String>,
    pub fields: Option<String>,
    pub additional_types: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub device_id: Option<String>,
}

pub const MAX_LIMIT: i64 = 50;
pub const TIME_RANGES: [&str; 3] = ["long_term", "medium_term", "short_term"];

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn time_range(mut self, time_range: impl Into<String>) -> Self {
        self.time_range = Some(time_range.into());
        self
    }

    pub fn include_groups(mut self, include_groups: impl Into<String>) -> Self {
        self.include_groups = Some(include_groups.into());
        self
    }

    pub fn include_external(mut self, include_external: impl Into<String>) -> Self {
        self.include_external = Some(include_external.into());
        self
    }

    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn additional_types(mut self, additional_types: impl Into<String>) -> Self {
        self.additional_types = Some(additional_types.into());
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Range checks applied before a request carrying these options is sent.
    pub fn validate(&self) -> Result<()> {
        self.validate_with_max(MAX_LIMIT)
    }

    /// Like [`validate`](Self::validate) for endpoints whose page size goes
    /// up to `max_limit`.
    pub fn validate_with_max(&self, max_limit: i64) -> Result<()> {
        if let Some(limit) = self.limit {
            validate::validate_range(limit as i64, "limit", 1, max_limit)?;
        }
        if let Some(time_range) = &self.time_range {
            validate::validate_one_of(time_range, "time_range", &TIME_RANGES)?;
        }
        if let Some(device_id) = &self.device_id {
            validate::id(device_id, "device_id")?;
        }
        Ok(())
    }

    /// Parameters in a fixed order, ready for [`with_query`].
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let numbers = [("limit", self.limit), ("offset", self.offset)];
        let texts = [
            ("market", &self.market),
            ("country", &self.country),
            ("locale", &self.locale),
            ("time_range", &self.time_range),
            ("include_groups", &self.include_groups),
            ("include_external", &self.include_external),
            ("fields", &self.fields),
            ("additional_types", &self.additional_types),
            ("after", &self.after),
            ("before", &self.before),
            ("device_id", &self.device_id),
        ];

        let mut pairs: Vec<(&'static str, String)> = texts
            .into_iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k, v.clone())))
            .collect();
        pairs.extend(
            numbers
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v.to_string()))),
        );
        pairs
    }
}

/// Appends percent-encoded `params` to `path`.
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", path, separator, query)
}
