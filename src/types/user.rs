use serde::Serialize;
use serde_json::Value;

use super::{
    DEFAULT_ID, DEFAULT_URI, ExplicitContentSettings, ExternalUrls, Followers, Image, ParseError,
    opt_array_lenient, opt_object, text, text_or,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: String,
    pub country: Option<String>,
    pub email: Option<String>,
    pub explicit_content: Option<ExplicitContentSettings>,
    pub external_urls: Option<ExternalUrls>,
    pub followers: Option<Followers>,
    pub href: Option<String>,
    pub images: Option<Vec<Image>>,
    pub product: Option<String>,
}

impl User {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(User {
            id: text_or(value, "id", DEFAULT_ID),
            display_name: text(value, "display_name"),
            kind: text_or(value, "type", "user"),
            uri: text_or(value, "uri", DEFAULT_URI),
            country: text(value, "country"),
            email: text(value, "email"),
            explicit_content: opt_object(
                value,
                "explicit_content",
                ExplicitContentSettings::from_json,
            ),
            external_urls: opt_object(value, "external_urls", ExternalUrls::from_json),
            followers: opt_object(value, "followers", Followers::from_json),
            href: text(value, "href"),
            images: opt_array_lenient(value, "images", Image::from_json),
            product: text(value, "product"),
        })
    }

    /// The display name, falling back to the user id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}
