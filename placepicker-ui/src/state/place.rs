//! Place types as sent by the API
//!
//! Only `id` matters to the UI logic; everything else is display data.
//! Unknown fields are kept so that a full-list replace sends back exactly
//! what the server gave us.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A place from the catalog or the user's list
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Place {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PlaceImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Either a URL or `{ src, alt }`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PlaceImage {
    Url(String),
    Asset {
        src: String,
        #[serde(default)]
        alt: String,
    },
}

impl Place {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Resolve the image to a URL the browser can load
    ///
    /// Absolute URLs are used as-is; bare file names are served by the API
    /// under `/images`.
    pub fn image_url(&self, api_base: &str) -> Option<String> {
        let src = match self.image.as_ref()? {
            PlaceImage::Url(url) => url,
            PlaceImage::Asset { src, .. } => src,
        };

        if src.contains("://") || src.starts_with("data:") {
            Some(src.clone())
        } else {
            Some(format!(
                "{}/images/{}",
                api_base.trim_end_matches('/'),
                src.trim_start_matches('/')
            ))
        }
    }

    /// Alt text for the image, falling back to the title
    pub fn image_alt(&self) -> String {
        match &self.image {
            Some(PlaceImage::Asset { alt, .. }) if !alt.is_empty() => alt.clone(),
            _ => self.title.clone(),
        }
    }
}
