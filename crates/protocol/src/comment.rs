use serde::Deserialize;

use crate::Result;

/// A comment as served by `/data`
///
/// The backend omits `imageURL` for comments posted without an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct Comment {
    pub content: String,

    #[serde(
        rename = "imageURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Comment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            image_url: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Image URL to render, if any. An empty string counts as no image.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Decode the JSON array returned by the comments endpoint
pub fn decode_comments(body: &str) -> Result<Vec<Comment>> {
    Ok(serde_json::from_str(body)?)
}
