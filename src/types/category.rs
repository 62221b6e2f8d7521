use serde::Serialize;
use serde_json::Value;

use super::{DEFAULT_ID, Image, ParseError, opt_array_lenient, text, text_or};

/// A browse category such as "Top Lists" or "Mood".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub href: Option<String>,
    pub icons: Option<Vec<Image>>,
}

impl Category {
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        Ok(Category {
            id: text_or(value, "id", DEFAULT_ID),
            name: text_or(value, "name", "Unknown Category"),
            href: text(value, "href"),
            icons: opt_array_lenient(value, "icons", Image::from_json),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn category_icons_drop_malformed_images() {
        let category = Category::from_json(&json!({
            "id": "toplists",
            "name": "Top Lists",
            "icons": [{ "url": "https://t.scdn.co/media/derived/toplists.jpg" }, { "url": null }]
        }))
        .unwrap();
        assert_eq!(category.icons.unwrap().len(), 1);

        let category = Category::from_json(&json!(null)).unwrap();
        assert_eq!(category.name, "Unknown Category");
    }
}
