//! Core data types for PlacePicker
//!
//! - `Place`: a single place that can be visited
//! - `PlaceImage`: display image attached to a place
//!
//! Only `id` carries meaning for the service. Every other field is display
//! data and unknown fields are carried through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A place that can be added to the user's list
///
/// Identity is the `id`; two places with the same id are the same place
/// for list membership even if their display data differs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Optional image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PlaceImage>,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any other fields (coordinates etc.)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Create a place with only an id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Builder method: attach an extra pass-through field
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Image attached to a place
///
/// Either a bare URL or an `{ src, alt }` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlaceImage {
    Url(String),
    Asset {
        src: String,
        #[serde(default)]
        alt: String,
    },
}

impl PlaceImage {
    /// Image source (URL or file name)
    pub fn src(&self) -> &str {
        match self {
            PlaceImage::Url(url) => url,
            PlaceImage::Asset { src, .. } => src,
        }
    }
}
