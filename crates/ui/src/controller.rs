//! Page controller: the three widget operations and their event wiring

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Window};

use crate::backend::{CommentsBackend, CommentsView};
use crate::config::PageConfig;
use crate::dom::PageElements;
use crate::error::{Result, UiError};
use crate::network::HttpBackend;
use crate::sequence::RenderSequencer;
use crate::view::CommentList;

pub struct PageController<B, V> {
    backend: B,
    view: V,
    renders: RenderSequencer,
}

/// Controller wired to `window.fetch` and the live page
pub type BrowserController = PageController<HttpBackend, PageElements>;

impl<B: CommentsBackend, V: CommentsView> PageController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            renders: RenderSequencer::new(),
        }
    }

    /// Fetch an upload URL and point the comment form at it
    ///
    /// The form is only revealed once the URL has arrived.
    pub async fn init_upload_form(&self) -> Result<()> {
        let action = self.backend.upload_url().await?;
        self.view.reveal_upload_form(&action)?;
        tracing::info!("comment form ready, posting to {action}");
        Ok(())
    }

    /// Fetch the filtered comments and replace the container's contents
    pub async fn render_comments(&self) -> Result<()> {
        let query = self.view.filters();
        let ticket = self.renders.begin();

        let comments = self.backend.comments(&query).await?;

        if !self.renders.try_apply(ticket) {
            tracing::debug!("dropping stale render #{}", ticket.id());
            return Ok(());
        }

        let list = CommentList::from_comments(&comments);
        self.view.show_comments(&list)?;
        tracing::debug!(
            "rendered {} comments (max={}, language={})",
            list.len(),
            query.max,
            query.language
        );
        Ok(())
    }

    /// Delete every comment, then re-render
    pub async fn delete_all(&self) -> Result<()> {
        self.backend.delete_all().await?;
        tracing::info!("comments deleted");
        self.render_comments().await
    }
}

impl BrowserController {
    /// Resolve the page's elements and build a controller over them
    pub fn attach(window: Window, config: &PageConfig) -> Result<Rc<Self>> {
        let document = window.document().ok_or(UiError::NoWindow)?;
        let elements = PageElements::resolve(document, config)?;
        let backend = HttpBackend::new(window, config.api_base.clone());

        Ok(Rc::new(Self::new(backend, elements)))
    }

    /// Run the page-load operations concurrently
    pub fn on_page_load(self: &Rc<Self>) {
        let controller = Rc::clone(self);
        spawn_local(async move {
            report("upload form", controller.init_upload_form().await);
        });

        let controller = Rc::clone(self);
        spawn_local(async move {
            report("render", controller.render_comments().await);
        });
    }

    /// Re-render on filter changes; delete on the delete button, if present
    pub fn bind_events(self: &Rc<Self>) -> Result<()> {
        for field in [&self.view.max, &self.view.language] {
            let controller = Rc::clone(self);
            listen(field, "change", move || {
                let controller = Rc::clone(&controller);
                spawn_local(async move {
                    report("render", controller.render_comments().await);
                });
            })?;
        }

        if let Some(button) = &self.view.delete_button {
            let controller = Rc::clone(self);
            listen(button, "click", move || {
                let controller = Rc::clone(&controller);
                spawn_local(async move {
                    report("delete", controller.delete_all().await);
                });
            })?;
        }

        Ok(())
    }
}

fn listen(el: &Element, event: &str, handler: impl FnMut() + 'static) -> Result<()> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Log a failed background operation to the console
pub fn report(operation: &str, result: Result<()>) {
    if let Err(err) = result {
        tracing::error!("{operation} failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use portfolio_comments_protocol::{Comment, CommentQuery};

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    /// In-memory comment service that records every call
    struct FakeBackend {
        log: Log,
        upload_url: Option<String>,
        comments: RefCell<Vec<Comment>>,
        reachable: bool,
    }

    #[async_trait(?Send)]
    impl CommentsBackend for FakeBackend {
        async fn upload_url(&self) -> Result<String> {
            self.log.borrow_mut().push("GET upload url".into());
            self.upload_url.clone().ok_or_else(|| UiError::Status {
                url: "/blobstore-upload-url".into(),
                status: 500,
            })
        }

        async fn comments(&self, query: &CommentQuery) -> Result<Vec<Comment>> {
            self.log.borrow_mut().push(format!("GET {}", query.path()));
            if query.max.parse::<u32>().is_err() {
                return Err(UiError::Status {
                    url: query.path(),
                    status: 400,
                });
            }
            Ok(self.comments.borrow().clone())
        }

        async fn delete_all(&self) -> Result<()> {
            self.log.borrow_mut().push("POST /delete-data".into());
            if !self.reachable {
                return Err(UiError::Js("Failed to fetch".into()));
            }
            self.comments.borrow_mut().clear();
            Ok(())
        }
    }

    /// Page stand-in holding the form state and every list shown
    struct FakeView {
        log: Log,
        filters: RefCell<CommentQuery>,
        action: RefCell<Option<String>>,
        shown: RefCell<Vec<CommentList>>,
    }

    impl CommentsView for FakeView {
        fn filters(&self) -> CommentQuery {
            self.filters.borrow().clone()
        }

        fn reveal_upload_form(&self, action: &str) -> Result<()> {
            self.log.borrow_mut().push(format!("reveal form -> {action}"));
            *self.action.borrow_mut() = Some(action.to_string());
            Ok(())
        }

        fn show_comments(&self, list: &CommentList) -> Result<()> {
            self.log.borrow_mut().push(format!("show {} items", list.len()));
            self.shown.borrow_mut().push(list.clone());
            Ok(())
        }
    }

    fn controller(
        upload_url: Option<&str>,
        comments: Vec<Comment>,
    ) -> (PageController<FakeBackend, FakeView>, Log) {
        let log = Log::default();
        let backend = FakeBackend {
            log: Rc::clone(&log),
            upload_url: upload_url.map(ToString::to_string),
            comments: RefCell::new(comments),
            reachable: true,
        };
        let view = FakeView {
            log: Rc::clone(&log),
            filters: RefCell::new(CommentQuery::new("5", "en")),
            action: RefCell::new(None),
            shown: RefCell::new(Vec::new()),
        };
        (PageController::new(backend, view), log)
    }

    fn calls(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[tokio::test]
    async fn test_form_revealed_after_upload_url_arrives() {
        let (page, log) = controller(Some("/_ah/upload/AMmfu6b"), vec![]);
        page.init_upload_form().await.unwrap();

        assert_eq!(
            calls(&log),
            ["GET upload url", "reveal form -> /_ah/upload/AMmfu6b"]
        );
    }

    #[tokio::test]
    async fn test_upload_url_used_verbatim() {
        let (page, _log) = controller(Some("/_ah/upload/abc\n"), vec![]);
        page.init_upload_form().await.unwrap();

        assert_eq!(page.view.action.borrow().as_deref(), Some("/_ah/upload/abc\n"));
    }

    #[tokio::test]
    async fn test_form_stays_hidden_when_upload_url_fails() {
        let (page, log) = controller(None, vec![]);
        assert!(page.init_upload_form().await.is_err());

        assert!(page.view.action.borrow().is_none());
        assert_eq!(calls(&log), ["GET upload url"]);
    }

    #[tokio::test]
    async fn test_render_sends_filters_verbatim() {
        let (page, log) = controller(None, vec![Comment::new("hi")]);
        page.render_comments().await.unwrap();

        assert_eq!(
            calls(&log),
            ["GET /data?max=5&language=en", "show 1 items"]
        );
    }

    #[tokio::test]
    async fn test_failed_render_leaves_list_untouched() {
        let (page, log) = controller(None, vec![Comment::new("hi")]);
        *page.view.filters.borrow_mut() = CommentQuery::new("abc", "en");

        assert!(page.render_comments().await.is_err());
        assert!(page.view.shown.borrow().is_empty());
        assert_eq!(calls(&log), ["GET /data?max=abc&language=en"]);
    }

    #[tokio::test]
    async fn test_failed_newer_render_does_not_block_older_result() {
        let (page, _log) = controller(None, vec![Comment::new("hi")]);
        page.render_comments().await.unwrap();

        *page.view.filters.borrow_mut() = CommentQuery::new("abc", "en");
        assert!(page.render_comments().await.is_err());

        *page.view.filters.borrow_mut() = CommentQuery::new("5", "en");
        page.render_comments().await.unwrap();
        assert_eq!(page.view.shown.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_then_refresh() {
        let comments = vec![Comment::new("first"), Comment::new("second")];
        let (page, log) = controller(None, comments);
        page.render_comments().await.unwrap();
        page.delete_all().await.unwrap();

        assert_eq!(
            calls(&log),
            [
                "GET /data?max=5&language=en",
                "show 2 items",
                "POST /delete-data",
                "GET /data?max=5&language=en",
                "show 0 items",
            ]
        );
        let shown = page.view.shown.borrow();
        assert!(shown.last().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_delete_skips_refresh() {
        let (mut page, log) = controller(None, vec![Comment::new("hi")]);
        page.backend.reachable = false;

        assert!(page.delete_all().await.is_err());
        assert_eq!(calls(&log), ["POST /delete-data"]);
        assert!(page.view.shown.borrow().is_empty());
    }
}
