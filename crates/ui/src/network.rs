use async_trait::async_trait;
use portfolio_comments_protocol::{decode_comments, Comment, CommentQuery, Endpoint};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

use crate::backend::CommentsBackend;
use crate::error::{Result, UiError};

async fn send(win: &Window, endpoint: Endpoint, url: &str) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method(endpoint.method().as_str());

    let req = Request::new_with_str_and_init(url, &opts)?;
    let resp_val = JsFuture::from(win.fetch_with_request(&req)).await?;
    let resp: Response = resp_val.dyn_into()?;

    tracing::debug!("{endpoint} ({url}) -> {}", resp.status());
    Ok(resp)
}

/// Request `url` and return the body as text. Non-2xx responses are errors.
async fn fetch_text(win: &Window, endpoint: Endpoint, url: &str) -> Result<String> {
    let resp = send(win, endpoint, url).await?;
    if !resp.ok() {
        return Err(UiError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| UiError::Js(format!("non-text body from {url}")))
}

/// Comment service reached over `window.fetch`
pub struct HttpBackend {
    window: Window,
    /// Prefix for every endpoint; empty means same origin
    api_base: String,
}

impl HttpBackend {
    pub const fn new(window: Window, api_base: String) -> Self {
        Self { window, api_base }
    }
}

#[async_trait(?Send)]
impl CommentsBackend for HttpBackend {
    async fn upload_url(&self) -> Result<String> {
        let endpoint = Endpoint::UploadUrl;
        fetch_text(&self.window, endpoint, &endpoint.url(&self.api_base)).await
    }

    async fn comments(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
        let url = query.url(&self.api_base);
        let body = fetch_text(&self.window, Endpoint::Comments, &url).await?;
        Ok(decode_comments(&body)?)
    }

    async fn delete_all(&self) -> Result<()> {
        let endpoint = Endpoint::DeleteAll;
        let url = endpoint.url(&self.api_base);
        let resp = send(&self.window, endpoint, &url).await?;
        if !resp.ok() {
            tracing::warn!("{endpoint} returned HTTP {}", resp.status());
        }
        Ok(())
    }
}
