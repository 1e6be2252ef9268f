use portfolio_comments_protocol::ProtocolError;
use wasm_bindgen::JsValue;

/// Failure of a page operation
///
/// Nothing recovers from these: they are logged to the console and, for
/// exported functions, reject the returned promise.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no global `window` or `document`")]
    NoWindow,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} has the wrong type")]
    WrongElement(String),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
