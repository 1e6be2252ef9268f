/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend endpoints used by the comment widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    UploadUrl, // /blobstore-upload-url
    Comments,  // /data
    DeleteAll, // /delete-data
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::UploadUrl => "/blobstore-upload-url",
            Self::Comments => "/data",
            Self::DeleteAll => "/delete-data",
        }
    }

    pub const fn method(self) -> Method {
        match self {
            Self::UploadUrl | Self::Comments => Method::Get,
            Self::DeleteAll => Method::Post,
        }
    }

    /// Full URL for this endpoint under `base` (empty for same-origin)
    pub fn url(self, base: &str) -> String {
        format!("{base}{}", self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Filter values for a comments request
///
/// Both values are taken as-is from the page's form fields. They are not
/// validated or percent-encoded here; the backend rejects what it can't use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentQuery {
    pub max: String,
    pub language: String,
}

impl CommentQuery {
    pub fn new(max: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            max: max.into(),
            language: language.into(),
        }
    }

    /// Path and query string, e.g. `/data?max=5&language=en`
    pub fn path(&self) -> String {
        format!(
            "{}?max={}&language={}",
            Endpoint::Comments.path(),
            self.max,
            self.language
        )
    }

    pub fn url(&self, base: &str) -> String {
        format!("{base}{}", self.path())
    }
}
