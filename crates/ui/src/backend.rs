//! Seams between the page controller and the outside world
//!
//! The browser implementations live in `network` (HTTP) and `dom` (page
//! elements).

use async_trait::async_trait;
use portfolio_comments_protocol::{Comment, CommentQuery};

use crate::error::Result;
use crate::view::CommentList;

/// The comment service the widget talks to
#[async_trait(?Send)]
pub trait CommentsBackend {
    /// Provision an upload URL for the comment form
    async fn upload_url(&self) -> Result<String>;

    /// Fetch the comments matching `query`
    async fn comments(&self, query: &CommentQuery) -> Result<Vec<Comment>>;

    /// Delete every comment. The response is not inspected.
    async fn delete_all(&self) -> Result<()>;
}

/// The part of the page the widget reads from and writes to
pub trait CommentsView {
    /// Filter values as they currently stand in the form
    fn filters(&self) -> CommentQuery;

    /// Point the comment form at `action` and make it visible
    fn reveal_upload_form(&self, action: &str) -> Result<()>;

    /// Replace the container's contents with `list`
    fn show_comments(&self, list: &CommentList) -> Result<()>;
}
