//! Portfolio comment widget, compiled to WebAssembly
//!
//! On load it points the comment form at a fresh upload URL and renders the
//! filtered comment list. `getComments()` and `deleteComments()` are exported
//! for the page's inline handlers.

pub mod backend;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod network;
pub mod sequence;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config::PageConfig;
use crate::controller::{report, BrowserController};
use crate::error::UiError;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

fn controller() -> Result<Rc<BrowserController>, JsValue> {
    CONTROLLER
        .with(|c| c.borrow().clone())
        .ok_or_else(|| JsValue::from_str("comment widget is not initialised"))
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoWindow)?;

    if document.ready_state() == "loading" {
        let onload = Closure::once(move || report("startup", start(window)));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            onload.as_ref().unchecked_ref(),
        )?;
        onload.forget();
        Ok(())
    } else {
        start(window).map_err(Into::into)
    }
}

fn start(window: Window) -> Result<(), UiError> {
    let document = window.document().ok_or(UiError::NoWindow)?;
    let config = PageConfig::from_document(&document);

    let controller = BrowserController::attach(window, &config)?;
    controller.bind_events()?;
    controller.on_page_load();

    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
    Ok(())
}

/// Re-render the comment list with the current filter values
#[wasm_bindgen(js_name = getComments)]
pub async fn get_comments() -> Result<(), JsValue> {
    let controller = controller()?;
    controller.render_comments().await.map_err(Into::into)
}

/// Delete every comment, then re-render
#[wasm_bindgen(js_name = deleteComments)]
pub async fn delete_comments() -> Result<(), JsValue> {
    let controller = controller()?;
    controller.delete_all().await.map_err(Into::into)
}
